//! Error types for payrun.
//!
//! This module defines all error types used throughout the payrun crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for payrun operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open a store file for reading or appending.
    #[error("failed to open store file {path}: {source}")]
    StoreOpen {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to append a record to a store file.
    #[error("failed to append record to {path}: {source}")]
    StoreAppend {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for payrun operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error is a configuration problem.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad(_) | Self::ConfigValidation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("hra_percent out of range");
        assert_eq!(
            err.to_string(),
            "invalid configuration: hra_percent out of range"
        );
    }

    #[test]
    fn test_is_config_error() {
        assert!(Error::config_validation("bad").is_config_error());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!Error::Io(io_err).is_config_error());
    }

    #[test]
    fn test_store_open_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::StoreOpen {
            path: PathBuf::from("/var/lib/payrun/employees.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/var/lib/payrun/employees.csv"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_directory_create_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
