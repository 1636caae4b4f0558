//! Domain-layer errors: business-rule violations, no I/O involved.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The component name answer was empty.
    #[error("Component name is required")]
    EmptyComponentName,

    /// The component name lacks the mandatory `-` separator.
    #[error("The name '{name}' must contain a \"-\" character")]
    NameMissingSeparator { name: String },

    /// A manifest document had a shape the transformer cannot work with.
    #[error("Invalid manifest document: {0}")]
    InvalidManifest(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyComponentName => vec![
                "Provide a component name".into(),
                "Example: raml-request-panel".into(),
            ],
            Self::NameMissingSeparator { name } => vec![
                format!("'{name}' has no dash; custom-element names need one"),
                format!("Try: my-{name}"),
            ],
            Self::InvalidManifest(msg) => vec![
                format!("Details: {msg}"),
                "Fix the manifest by hand and re-run".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyComponentName | Self::NameMissingSeparator { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidManifest(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_errors_are_validation() {
        assert_eq!(
            DomainError::EmptyComponentName.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::NameMissingSeparator { name: "x".into() }.category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn missing_separator_suggestion_names_the_input() {
        let err = DomainError::NameMissingSeparator {
            name: "panel".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("panel")));
    }
}
