//! Custom error types for the stokvel ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for stokvel ledger operations
#[derive(Error, Debug)]
pub enum StokvelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("{0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} '{identifier}' not found{}.", in_group(.group))]
    NotFound {
        entity_type: &'static str,
        identifier: String,
        group: Option<String>,
    },

    /// Duplicate entity errors
    #[error("{entity_type} '{identifier}' already exists{}.", in_group(.group))]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
        group: Option<String>,
    },

    /// SMS delivery errors
    #[error("Failed to send SMS: {0}")]
    Notification(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Database errors
    #[error("Storage error: {0}")]
    Storage(String),
}

fn in_group(group: &Option<String>) -> String {
    group
        .as_deref()
        .map(|g| format!(" in group '{}'", g))
        .unwrap_or_default()
}

impl StokvelError {
    /// Create a "not found" error for groups
    pub fn group_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Group",
            identifier: name.into(),
            group: None,
        }
    }

    /// Create a "not found" error for a member within a group
    pub fn member_not_found(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Member",
            identifier: name.into(),
            group: Some(group.into()),
        }
    }

    /// Create a "duplicate" error for groups
    pub fn duplicate_group(name: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Group",
            identifier: name.into(),
            group: None,
        }
    }

    /// Create a "duplicate" error for a member within a group
    pub fn duplicate_member(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Member",
            identifier: name.into(),
            group: Some(group.into()),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a "duplicate" error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the interactive shell can report this error and keep going.
    ///
    /// Store and file system failures are not recoverable from the menu and
    /// end the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Duplicate { .. }
                | Self::Validation(_)
                | Self::Notification(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for StokvelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StokvelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rusqlite::Error> for StokvelError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<csv::Error> for StokvelError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for stokvel ledger operations
pub type StokvelResult<T> = Result<T, StokvelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StokvelError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_group_not_found_error() {
        let err = StokvelError::group_not_found("Savers");
        assert_eq!(err.to_string(), "Group 'Savers' not found.");
        assert!(err.is_not_found());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_member_not_found_error() {
        let err = StokvelError::member_not_found("Thabo", "Savers");
        assert_eq!(
            err.to_string(),
            "Member 'Thabo' not found in group 'Savers'."
        );
    }

    #[test]
    fn test_duplicate_errors() {
        let err = StokvelError::duplicate_group("Savers");
        assert_eq!(err.to_string(), "Group 'Savers' already exists.");
        assert!(err.is_duplicate());

        let err = StokvelError::duplicate_member("Thabo", "Savers");
        assert_eq!(
            err.to_string(),
            "Member 'Thabo' already exists in group 'Savers'."
        );
    }

    #[test]
    fn test_storage_errors_are_fatal() {
        let err = StokvelError::Storage("disk I/O error".into());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StokvelError = io_err.into();
        assert!(matches!(err, StokvelError::Io(_)));
    }
}
