//! Error handling module for the feedback form
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Validation failures are NOT errors: a rejected submit is reported through
//! [`crate::engine::SubmitOutcome`]. The variants here cover caller defects
//! (unknown field names, stale indices) and the I/O edges of the binary.

use thiserror::Error;

/// Main error type for the feedback form
#[derive(Error, Debug)]
pub enum FormError {
    /// A field name that does not belong to the form
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Edit/delete targeted a row that does not exist
    #[error("Index {index} out of range for {len} submitted entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for feedback form operations
pub type Result<T> = std::result::Result<T, FormError>;

impl FormError {
    /// Create an invalid field error
    pub fn invalid_field(name: impl Into<String>) -> Self {
        Self::InvalidField(name.into())
    }

    /// Create an out-of-range error for a list of `len` entries
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// True for errors caused by a caller passing bad arguments
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidField(_) | Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::invalid_field("phone");
        assert_eq!(err.to_string(), "Invalid field: phone");

        let err = FormError::index_out_of_range(3, 1);
        assert_eq!(
            err.to_string(),
            "Index 3 out of range for 1 submitted entries"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FormError = io_err.into();
        assert!(matches!(err, FormError::Io(_)));
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_contract_violations() {
        assert!(FormError::invalid_field("x").is_contract_violation());
        assert!(FormError::index_out_of_range(0, 0).is_contract_violation());
        let json_err = serde_json::from_str::<u8>("x").expect_err("not a number");
        assert!(!FormError::from(json_err).is_contract_violation());
    }
}
