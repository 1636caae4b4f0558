//! Domain layer: pure logic with no I/O.
//!
//! Everything here is testable without a filesystem or a terminal:
//! - [`case_map`] — dash ↔ camel conversion with memoization
//! - [`tokens`] — wizard answers and the derived template token set
//! - [`legacy`] — the obsolete-file inventory
//! - [`manifest`] — package/bower document transformers
//! - [`ci`] — the CI manifest replacement

pub mod case_map;
pub mod ci;
pub mod error;
pub mod legacy;
pub mod manifest;
pub mod tokens;

pub use case_map::{CaseMap, SEPARATOR};
pub use error::DomainError;
pub use legacy::{LEGACY_FILES, LegacyInventory};
pub use tokens::{Answers, DEFAULT_VERSION, PREVIEW_VERSION, TokenSet, validate_component_name};
