//! # Money Module
//!
//! Provides the `Amount` type for the register's running total.
//!
//! ## Why f64 Dollars?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ACCUMULATION ORDER IS PART OF THE CONTRACT                             │
//! │                                                                         │
//! │  add_item("tomato", 1.76, 3) is three additions, not one multiply:     │
//! │    total += 1.76; total += 1.76; total += 1.76                         │
//! │                                                                         │
//! │  Register totals are compared against naive float accumulation, so     │
//! │  the amount stays a plain f64 and every unit is added on its own.      │
//! │  Only the DISPLAY rounds: `{:.2}` → "$5.28"                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Amount;
//!
//! let mut total = Amount::zero();
//! total += Amount::from_dollars(4.5);
//! total += Amount::from_dollars(5.0);
//! assert_eq!(total, 9.5);
//! assert_eq!(total.to_string(), "$9.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{AddAssign, SubAssign};

use crate::types::DiscountRate;

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value in dollars.
///
/// ## Design Decisions
/// - **f64**: totals must match repeated float addition bit for bit
/// - **Single field tuple struct**: serializes as a bare number
/// - **No Eq/Ord**: floats have NaN; the register never stores one
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(f64);

impl Amount {
    /// Creates an amount from a dollar value.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Amount;
    ///
    /// let price = Amount::from_dollars(0.98);
    /// assert_eq!(price.dollars(), 0.98);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: f64) -> Self {
        Amount(dollars)
    }

    /// Returns the raw dollar value.
    #[inline]
    pub const fn dollars(&self) -> f64 {
        self.0
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Checks if the value is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// Computed as `v - v * (pct / 100)`, in that order.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Amount;
    /// use till_core::types::DiscountRate;
    ///
    /// let rate = DiscountRate::from_percentage(20.0).unwrap();
    /// let total = Amount::from_dollars(1000.0).discounted(rate);
    /// assert_eq!(total, 800.0);
    /// ```
    pub fn discounted(&self, rate: DiscountRate) -> Amount {
        Amount(self.0 - self.0 * (rate.percentage() / 100.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount as `$D.CC`, rounded to two decimals.
///
/// This is the exact format used by the discount notice. A negative total
/// keeps its sign after the dollar sign: `$-2.25`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 == 0.0, so this folds negative zero into "$0.00"
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "${:.2}", value)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl PartialEq<f64> for Amount {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl SubAssign for Amount {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
