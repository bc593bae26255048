//! # Domain Types
//!
//! Small value types shared by the register and the session binary.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────────┐                     │
//! │  │  DiscountRate   │   │    DiscountOutcome      │                     │
//! │  │  ─────────────  │   │  ─────────────────────  │                     │
//! │  │  pct (f64)      │   │  Applied { total }      │                     │
//! │  │  20.0 = 20%     │   │  NoDiscount             │                     │
//! │  │  0.0 = none     │   │  Display = notice text  │                     │
//! │  └─────────────────┘   └─────────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Amount;
use crate::validation::{validate_discount_percent, ValidationResult};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate as a plain percentage.
///
/// Fixed for the lifetime of a register. Zero means "no discount".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// Creates a discount rate from a percentage.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::types::DiscountRate;
    ///
    /// let rate = DiscountRate::from_percentage(20.0).unwrap();
    /// assert_eq!(rate.percentage(), 20.0);
    ///
    /// assert!(DiscountRate::from_percentage(-1.0).is_err());
    /// assert!(DiscountRate::from_percentage(150.0).is_ok());
    /// ```
    pub fn from_percentage(pct: f64) -> ValidationResult<Self> {
        validate_discount_percent(pct)?;
        Ok(DiscountRate(pct))
    }

    /// No discount.
    #[inline]
    pub const fn none() -> Self {
        DiscountRate(0.0)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> f64 {
        self.0
    }

    /// Checks if there is anything to discount.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.0 > 0.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::none()
    }
}

// =============================================================================
// Discount Outcome
// =============================================================================

/// What `apply_discount` did.
///
/// The `Display` form is the exact notice line, without the trailing newline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountOutcome {
    /// The discount was applied; carries the new total.
    Applied { total: Amount },
    /// The register has a zero discount rate.
    NoDiscount,
}

impl fmt::Display for DiscountOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountOutcome::Applied { total } => {
                write!(f, "After the discount, the total comes to {}.", total)
            }
            DiscountOutcome::NoDiscount => write!(f, "There is no discount to apply."),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
