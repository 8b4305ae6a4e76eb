//! # Error Types
//!
//! Structured error types for mechlab_core. Every model refuses to produce a
//! result for physically meaningless input instead of clamping it, and reports
//! which field was rejected so a caller can re-prompt with corrected values.
//!
//! ## Example
//!
//! ```rust
//! use mechlab_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_mm2: f64) -> CalcResult<()> {
//!     if area_mm2 <= 0.0 {
//!         return Err(CalcError::invalid_parameter(
//!             "area_mm2",
//!             area_mm2.to_string(),
//!             "Area must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_area(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mechlab_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Computations are deterministic, so none of these are retryable: the same
/// input always yields the same error.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of its physical domain (non-positive dimension,
    /// modulus or strength, Poisson ratio outside [0, 0.5), non-finite value).
    /// Zero denominators are reported here before any division happens.
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// Material not found in the catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Loading-mode name not recognised
    #[error("Unknown module: {name}")]
    UnknownModule { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an UnknownModule error
    pub fn unknown_module(name: impl Into<String>) -> Self {
        CalcError::UnknownModule { name: name.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidParameter { .. } => "INVALID_PARAMETER",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::UnknownModule { .. } => "UNKNOWN_MODULE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// Name of the rejected field, if this error is about a single parameter
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

// ============================================================================
// Shared validation helpers
// ============================================================================

/// Require a finite value.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_parameter(
            field,
            value.to_string(),
            "Value must be finite",
        ));
    }
    Ok(value)
}

/// Require a finite, strictly positive value.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_parameter(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(value)
}
