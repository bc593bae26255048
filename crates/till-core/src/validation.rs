//! # Validation Module
//!
//! Input checks run before the register is touched.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Session command parser (apps/till)                           │
//! │  ├── Token shape (is the price a number at all?)                       │
//! │  └── Immediate `error: ...` line                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Title present                                                     │
//! │  ├── Price finite and not negative                                     │
//! │  ├── Quantity positive                                                 │
//! │  └── Discount percentage finite and not negative                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_title, validate_quantity};
//!
//! assert!(validate_title("eggs").is_ok());
//! assert!(validate_quantity(3).is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item title.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_title;
///
/// assert!(validate_title("Lucky Charms").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price in dollars.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_price;
///
/// assert!(validate_price(0.98).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative; rates above 100 are accepted
pub fn validate_discount_percent(pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "discount".to_string(),
        });
    }

    if pct < 0.0 {
        return Err(ValidationError::Negative {
            field: "discount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
