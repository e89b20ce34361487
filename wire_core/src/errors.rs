//! # Error Types
//!
//! Structured error types for wire_core. Every failure in the engine or the
//! setup store surfaces as a distinct [`WireError`] variant with enough
//! context for the UI layer to present a useful message; nothing is
//! caught-and-ignored inside the library.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::errors::{WireError, WireResult};
//!
//! fn validate_voltage(volts: f64) -> WireResult<()> {
//!     if volts <= 0.0 {
//!         return Err(WireError::invalid_input(
//!             "voltage",
//!             volts.to_string(),
//!             "Voltage must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wire_core operations
pub type WireResult<T> = Result<T, WireError>;

/// Structured error type for calculation and storage operations.
///
/// Each variant carries specific context about what went wrong, so callers
/// can handle failures programmatically rather than matching on strings.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum WireError {
    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The wire-size denominator evaluated to exactly zero
    #[error("Division by zero: wire-size denominator is {denominator}")]
    DivisionByZero { denominator: f64 },

    /// A setup index is out of range for the current list
    #[error("Setup index {index} out of bounds (list holds {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// File I/O error on the setups file
    #[error("File error: {operation} on '{path}' - {reason}")]
    File {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error (corrupt setups file)
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Setups file schema version is incompatible
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl WireError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        WireError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        WireError::MissingField {
            field: field.into(),
        }
    }

    /// Create an IndexOutOfBounds error
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        WireError::IndexOutOfBounds { index, len }
    }

    /// Create a File error
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        WireError::File {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WireError::InvalidInput { .. } => "INVALID_INPUT",
            WireError::MissingField { .. } => "MISSING_FIELD",
            WireError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            WireError::IndexOutOfBounds { .. } => "INDEX_OUT_OF_BOUNDS",
            WireError::File { .. } => "FILE_ERROR",
            WireError::Serialization { .. } => "SERIALIZATION_ERROR",
            WireError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = WireError::invalid_input("voltage", "-120", "Voltage must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: WireError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            WireError::missing_field("current").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            WireError::index_out_of_bounds(5, 2).error_code(),
            "INDEX_OUT_OF_BOUNDS"
        );
        assert_eq!(
            WireError::DivisionByZero { denominator: 0.0 }.error_code(),
            "DIVISION_BY_ZERO"
        );
    }

    #[test]
    fn test_error_display() {
        let error = WireError::index_out_of_bounds(3, 3);
        assert_eq!(
            error.to_string(),
            "Setup index 3 out of bounds (list holds 3)"
        );
    }
}
