//! Wcforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the wcforge
//! web-component scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          wcforge-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (GeneratorService, Migrator)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, TemplateSource, Prompter, │
//! │              Installer)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    wcforge-adapters (Infrastructure)    │
//! │  (LocalFilesystem, BuiltinTemplates,    │
//! │     ConsolePrompt, CommandInstaller)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (CaseMap, TokenSet, LegacyInventory,   │
//! │        manifest transformers)           │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wcforge_core::prelude::*;
//!
//! // Wire a service with injected adapters, then run it interactively.
//! let service = GeneratorService::new(filesystem, templates, installer, root, false);
//! let report = service.run(&prompter)?;
//! println!("wrote {} files", report.written.len());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateReport, GeneratorService, Wizard,
        ports::{Filesystem, Installer, Prompter, TemplateSource},
        wizard::{ConfirmQuestion, InputQuestion},
    };
    pub use crate::domain::{
        Answers, CaseMap, LEGACY_FILES, LegacyInventory, TokenSet, validate_component_name,
    };
    pub use crate::error::{WcforgeError, WcforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
