// nmltree/src/error.rs

//! Error types for typed access and file I/O on namelist trees.
//!
//! Parsing itself never fails: malformed lines are dropped and malformed
//! scalars are coerced. Errors only come from typed access, keyed lookup
//! and the file helpers in the crate root.

use crate::value::ValueType;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nmltree operations.
pub type Result<T> = std::result::Result<T, NmlError>;

/// Errors that can occur when reading from or writing a namelist tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NmlError {
    /// The active payload kind differs from the requested one
    #[error("Value '{key}' holds {found}, requested {expected}")]
    TypeMismatch {
        key: String,
        expected: ValueType,
        found: ValueType,
    },

    /// No direct child with the given key
    #[error("Key '{key}' not found in '{parent}'")]
    KeyNotFound { parent: String, key: String },

    /// I/O error when reading or writing files
    #[error("I/O error: {0}")]
    Io(String),

    /// File already exists (when force=false)
    #[error("File already exists: {}", .0.display())]
    FileAlreadyExists(PathBuf),

    /// Serialization/deserialization error
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<io::Error> for NmlError {
    fn from(err: io::Error) -> Self {
        NmlError::Io(err.to_string())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for NmlError {
    fn from(err: serde_json::Error) -> Self {
        NmlError::Json(err.to_string())
    }
}

impl NmlError {
    /// Create a new type mismatch error.
    pub fn type_mismatch<S: Into<String>>(key: S, expected: ValueType, found: ValueType) -> Self {
        NmlError::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create a new key not found error.
    pub fn key_not_found<S: Into<String>>(parent: S, key: S) -> Self {
        NmlError::KeyNotFound {
            parent: parent.into(),
            key: key.into(),
        }
    }

    /// Get the error category for logging purposes.
    pub fn category(&self) -> &'static str {
        match self {
            NmlError::TypeMismatch { .. } => "type",
            NmlError::KeyNotFound { .. } => "not_found",
            NmlError::Io(_) => "io",
            NmlError::FileAlreadyExists(_) => "file_exists",
            #[cfg(feature = "json")]
            NmlError::Json(_) => "json",
        }
    }

    /// Check if the caller can recover, e.g. by supplying a default or
    /// creating the missing key.
    pub fn is_recoverable(&self) -> bool {
        match self {
            NmlError::TypeMismatch { .. } => true,
            NmlError::KeyNotFound { .. } => true,
            NmlError::Io(_) => false,
            NmlError::FileAlreadyExists(_) => true, // Can use force=true
            #[cfg(feature = "json")]
            NmlError::Json(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NmlError::type_mismatch("decay", ValueType::Integer, ValueType::Double);
        assert_eq!(
            err.to_string(),
            "Value 'decay' holds double, requested integer"
        );

        let err = NmlError::key_not_found("ls", "missing");
        assert_eq!(err.to_string(), "Key 'missing' not found in 'ls'");
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            NmlError::key_not_found("ls", "x").category(),
            "not_found"
        );
        assert_eq!(NmlError::Io("boom".into()).category(), "io");
        assert!(!NmlError::Io("boom".into()).is_recoverable());
        assert!(NmlError::type_mismatch("x", ValueType::Boolean, ValueType::None).is_recoverable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: NmlError = io_err.into();
        assert!(matches!(err, NmlError::Io(ref msg) if msg.contains("no such file")));
    }
}
