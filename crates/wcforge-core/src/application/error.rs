//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A JSON manifest exists but could not be parsed. Unrecoverable:
    /// migrating a document we cannot read risks destroying it.
    #[error("Failed to parse manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// A template body the materializer needs is not in the template set.
    #[error("Template not found: {path}")]
    TemplateMissing { path: String },

    /// The prompt channel failed or was aborted mid-sequence. Fatal for the
    /// whole run; there is no cancellation path through the wizard.
    #[error("Prompting aborted: {reason}")]
    PromptAborted { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the destination directory exists".into(),
            ],
            Self::ManifestParse { path, .. } => vec![
                format!("'{}' is not valid JSON", path.display()),
                "Fix the file by hand, then re-run".into(),
            ],
            Self::TemplateMissing { path } => vec![
                format!("The bundled template set has no '{path}'"),
                "This is likely a packaging error; reinstall wcforge".into(),
            ],
            Self::PromptAborted { .. } => vec![
                "The run was stopped before all questions were answered".into(),
                "No further files were written".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::ManifestParse { .. } => ErrorCategory::Internal,
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::PromptAborted { .. } => ErrorCategory::Validation,
        }
    }
}
