//! # Error Types
//!
//! Structured error types for bldg_core. The calculator and the validator
//! never fail; every error here comes from building an entity out of
//! untrusted input (a constructor, `validate()`, or the JSON/file boundary).
//!
//! ## Example
//!
//! ```rust
//! use bldg_core::errors::{BldgError, BldgResult};
//!
//! fn check_length(length_feet: f64) -> BldgResult<()> {
//!     if length_feet <= 0.0 {
//!         return Err(BldgError::invalid_input(
//!             "length_feet",
//!             length_feet.to_string(),
//!             "Wall length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bldg_core operations
pub type BldgResult<T> = Result<T, BldgError>;

/// Structured error type for model construction and file handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BldgError {
    /// An input value is invalid (out of range, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field or list is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A label that does not name any known variant (framing, room type, zone)
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: String, value: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl BldgError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BldgError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        BldgError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownVariant error
    pub fn unknown_variant(kind: impl Into<String>, value: impl Into<String>) -> Self {
        BldgError::UnknownVariant {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BldgError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Prefix the field path of a child entity's error with its position
    /// in the parent, e.g. `height_feet` -> `walls[2].height_feet`.
    pub fn within(self, parent: &str) -> Self {
        match self {
            BldgError::InvalidInput { field, value, reason } => BldgError::InvalidInput {
                field: format!("{}.{}", parent, field),
                value,
                reason,
            },
            BldgError::MissingField { field } => BldgError::MissingField {
                field: format!("{}.{}", parent, field),
            },
            other => other,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BldgError::InvalidInput { .. } => "INVALID_INPUT",
            BldgError::MissingField { .. } => "MISSING_FIELD",
            BldgError::UnknownVariant { .. } => "UNKNOWN_VARIANT",
            BldgError::FileError { .. } => "FILE_ERROR",
            BldgError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for BldgError {
    fn from(e: serde_json::Error) -> Self {
        BldgError::SerializationError {
            reason: e.to_string(),
        }
    }
}

/// Reject a value that is not strictly positive (NaN included).
pub(crate) fn require_positive(field: &str, value: f64, reason: &str) -> BldgResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(BldgError::invalid_input(field, value.to_string(), reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BldgError::invalid_input("length_feet", "-5", "Wall length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: BldgError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BldgError::missing_field("walls").error_code(), "MISSING_FIELD");
        assert_eq!(
            BldgError::unknown_variant("room type", "Garage").error_code(),
            "UNKNOWN_VARIANT"
        );
    }

    #[test]
    fn test_within_nests_field_paths() {
        let err = BldgError::invalid_input("height_feet", "4", "too short")
            .within("walls[2]")
            .within("rooms[0]");
        match err {
            BldgError::InvalidInput { field, .. } => assert_eq!(field, "rooms[0].walls[2].height_feet"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("x", 1.0, "must be positive").is_ok());
        assert!(require_positive("x", 0.0, "must be positive").is_err());
        assert!(require_positive("x", f64::NAN, "must be positive").is_err());
    }
}
