// 🚨 Error Taxonomy
// Every failure is terminal for the current invocation - nothing is retried

use std::path::PathBuf;
use thiserror::Error;

use crate::profile::Label;

/// Library result alias
pub type Result<T> = std::result::Result<T, InsightError>;

#[derive(Debug, Error)]
pub enum InsightError {
    /// Required label absent, or present without a parseable amount
    #[error("No {label} found in document")]
    MissingField { label: Label },

    /// File extension has no loader
    #[error("Unsupported file type: {extension}")]
    UnsupportedFormat { extension: String },

    /// Loader backend was compiled out (cargo feature disabled)
    #[error("{format} support not available (rebuild with --features {feature})")]
    DependencyUnavailable {
        format: &'static str,
        feature: &'static str,
    },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backend could not make sense of the file contents
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl InsightError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InsightError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InsightError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_label() {
        let err = InsightError::MissingField {
            label: Label::HouseholdIncome,
        };
        assert_eq!(err.to_string(), "No Household_Income found in document");
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = InsightError::UnsupportedFormat {
            extension: ".txt".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported file type: .txt");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = InsightError::io(
            "missing.pdf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("missing.pdf"));
        assert!(err.source().is_some());
    }
}
