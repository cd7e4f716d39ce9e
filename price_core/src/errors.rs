//! # Error Types
//!
//! Structured error types for price_core. Pricing itself has exactly one
//! failure mode: a production mode needs a media or substrate item that the
//! supplied catalog does not contain. The remaining variants belong to the
//! profile file layer.
//!
//! ## Example
//!
//! ```rust
//! use price_core::errors::{CatalogKind, PriceError, PriceResult};
//!
//! fn require_media(id: Option<&str>) -> PriceResult<()> {
//!     match id {
//!         Some(_) => Ok(()),
//!         None => Err(PriceError::missing_reference(
//!             CatalogKind::Media,
//!             None,
//!             "Select a vinyl media",
//!         )),
//!     }
//! }
//!
//! let err = require_media(None).unwrap_err();
//! assert_eq!(err.to_string(), "Select a vinyl media");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for price_core operations
pub type PriceResult<T> = Result<T, PriceError>;

/// Which catalog a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogKind {
    /// Vinyl media (printable or solid colour)
    Media,
    /// Rigid substrate sheets
    Substrate,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Media => write!(f, "media"),
            CatalogKind::Substrate => write!(f, "substrate"),
        }
    }
}

/// Structured error type for pricing and profile operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PriceError {
    /// The production mode needs a catalog item that was not selected or
    /// does not exist in the supplied catalog.
    #[error("{message}")]
    MissingCatalogReference {
        catalog: CatalogKind,
        reference: Option<String>,
        message: String,
    },

    /// A profile value is invalid (duplicate id, impossible roll widths, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

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

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl PriceError {
    /// Create a MissingCatalogReference error
    pub fn missing_reference(
        catalog: CatalogKind,
        reference: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        PriceError::MissingCatalogReference {
            catalog,
            reference: reference.map(str::to_string),
            message: message.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PriceError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        PriceError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the caller should surface this as a form validation problem
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PriceError::MissingCatalogReference { .. } | PriceError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PriceError::MissingCatalogReference { .. } => "MISSING_CATALOG_REFERENCE",
            PriceError::InvalidInput { .. } => "INVALID_INPUT",
            PriceError::FileError { .. } => "FILE_ERROR",
            PriceError::SerializationError { .. } => "SERIALIZATION_ERROR",
            PriceError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = PriceError::missing_reference(CatalogKind::Substrate, Some("acm-9"), "Select a substrate");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("MissingCatalogReference"));
        let roundtrip: PriceError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_missing_reference_displays_message_only() {
        let error = PriceError::missing_reference(CatalogKind::Media, None, "Select a printable media");
        assert_eq!(error.to_string(), "Select a printable media");
        assert!(error.is_validation());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PriceError::missing_reference(CatalogKind::Media, None, "x").error_code(),
            "MISSING_CATALOG_REFERENCE"
        );
        assert_eq!(PriceError::invalid_input("id", "md3", "dup").error_code(), "INVALID_INPUT");
        assert!(!PriceError::file_error("open", "a.json", "nope").is_validation());
    }
}
