//! # Error Types
//!
//! Domain-specific error types for cosmo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cosmo-core errors (this file)                                         │
//! │  └── ValidationError  - Form input rejected before any write           │
//! │                                                                         │
//! │  cosmo-db errors (separate crate)                                      │
//! │  ├── DbError          - Database operation failures                    │
//! │  └── AssetError       - Image staging failures                         │
//! │                                                                         │
//! │  Desktop API errors (in app)                                           │
//! │  └── ApiError         - What the graphical layer sees (serialized)     │
//! │                                                                         │
//! │  Flow: ValidationError / DbError / AssetError → ApiError → Message box │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in every message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the boundary that collects user input. The store never
/// produces these; it accepts whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., bad date, illegal characters in a code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("code");
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::InvalidFormat {
            field: "expiration_date".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(err.field(), "expiration_date");
    }
}
