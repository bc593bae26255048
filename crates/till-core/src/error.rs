//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Register operation failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  till app errors (apps/till)                                           │
//! │  └── AppError         - What the session prints as `error: ...`        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `add_item` and discount construction can fail. Applying a discount
//! and voiding the last transaction always succeed.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Register operation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The running total would stop being a finite number.
    ///
    /// ## When This Occurs
    /// - Adding an absurdly large price (e.g. `1e308`) more than once
    ///
    /// The register is left unchanged.
    #[error("Total out of range after adding {title}")]
    TotalOutOfRange { title: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any register state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// NaN or infinity where an amount was expected.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TotalOutOfRange {
            title: "yacht".to_string(),
        };
        assert_eq!(err.to_string(), "Total out of range after adding yacht");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price cannot be negative");

        let err = ValidationError::NotFinite {
            field: "discount".to_string(),
        };
        assert_eq!(err.to_string(), "discount must be a finite number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: quantity must be positive");
    }
}
