//! Infrastructure adapters for wcforge.
//!
//! This crate implements the ports defined in `wcforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod installer;
pub mod prompt;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{CommandInstaller, NoopInstaller};
#[cfg(feature = "interactive")]
pub use prompt::ConsolePrompt;
pub use prompt::ScriptedPrompt;
pub use templates::BuiltinTemplates;
