//! Custom error types for subtestify.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for subtestify operations.
#[derive(Error, Debug)]
pub enum SubtestifyError {
    // File system errors
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing errors
    #[error("Failed to initialize Go parser: {0}")]
    ParserSetup(String),

    #[error("Invalid Go source: syntax error at line {line}, column {column}")]
    Parse { line: usize, column: usize },

    #[error("Invalid Go source: missing package clause")]
    MissingPackage,

    // Per-declaration classification errors, never fatal
    #[error("Could not classify {name}: {reason}")]
    Classification { name: String, reason: String },

    // Rendering errors
    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),
}

/// Result type alias using SubtestifyError
pub type Result<T> = std::result::Result<T, SubtestifyError>;

impl SubtestifyError {
    /// Create an I/O error tied to the path being read or written
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a classification error for a declaration name
    pub fn classification(
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Classification {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error only affects a single declaration.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Classification { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_error_names_the_declaration() {
        let err = SubtestifyError::classification("helper", "missing marker");
        assert_eq!(err.to_string(), "Could not classify helper: missing marker");
        assert!(err.is_recoverable());
    }

    #[test]
    fn parse_error_reports_position() {
        let err = SubtestifyError::Parse { line: 3, column: 7 };
        assert_eq!(
            err.to_string(),
            "Invalid Go source: syntax error at line 3, column 7"
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn io_error_includes_path() {
        let err = SubtestifyError::io(
            "missing_test.go",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing_test.go"));
        assert!(err.to_string().contains("not found"));
    }
}
