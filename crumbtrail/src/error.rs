//! Error types for the crumbtrail library.
//!
//! Trail construction never fails: unresolvable references and missing
//! configuration degrade to shorter trails. The errors here come from the
//! surrounding plumbing (loading site files, validating configuration and
//! editing breadcrumb settings).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a crumbtrail error.
///
/// # Examples
///
/// ```
/// use crumbtrail::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(12)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the crumbtrail library.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested entity or configuration object was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An entity reference could not be parsed.
    #[error("invalid entity reference '{input}': expected an id or 'Label (id)'")]
    InvalidReference {
        /// The raw reference input.
        input: String,
    },

    /// A configuration file could not be parsed or written.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a missing entity or configuration object.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbtrail::Error;
    ///
    /// let err = Error::NotFound { resource: "content type 'page'".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "allowed_types".to_string(),
            message: "unknown content type 'article'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("allowed_types"));
        assert!(display.contains("article"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            resource: "role 'editor'".to_string(),
        };
        assert_eq!(format!("{err}"), "not found: role 'editor'");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/missing/crumbtrail.yaml"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/missing/crumbtrail.yaml"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn test_invalid_reference_error() {
        let err = Error::InvalidReference {
            input: "Page One".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("Page One"));
        assert!(display.contains("Label (id)"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<u64>>("{not: [a list").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").starts_with("configuration error"));
    }
}
