//! # Register
//!
//! The register owns the running total, the discount rate, and the
//! purchase history of one session.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Operations                                  │
//! │                                                                         │
//! │  Operation               Entries                  Total                 │
//! │  ─────────               ───────                  ─────                 │
//! │                                                                         │
//! │  add_item(t, p, q) ────► push (t, p, batch) × q ► += p, q times         │
//! │                                                                         │
//! │  apply_discount() ─────► (unchanged) ───────────► -= total × pct/100    │
//! │                                                   + one notice          │
//! │                                                                         │
//! │  void_last_transaction ► pop one entry ─────────► -= entry.price        │
//! │                                                   reset to 0.0 when     │
//! │                                                   only the voided batch │
//! │                                                   (or nothing) remains  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entries vs. Items
//! Each unit is stored with the price it was rung up at, so voiding always
//! subtracts the right amount. Callers only ever see the titles through
//! [`Register::items`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Amount;
use crate::notice::NoticeSink;
use crate::types::{DiscountOutcome, DiscountRate};
use crate::validation::{validate_price, validate_quantity, validate_title};

/// One purchased unit.
#[derive(Debug, Clone)]
struct Entry {
    title: String,
    price: Amount,
    /// Shared by every unit pushed by the same `add_item` call.
    batch: u64,
}

/// A point-of-sale register.
///
/// ## Invariants
/// - `total` is finite after every operation
/// - `total` is non-negative until a discount is applied; a void after a
///   discount subtracts the full frozen price and can leave it below zero
/// - `total` equals the sum of entry prices until a discount is applied
///   or a void triggers the batch reset
/// - The discount rate never changes after construction
#[derive(Debug, Clone, Default)]
pub struct Register {
    discount: DiscountRate,
    total: Amount,
    entries: Vec<Entry>,
    next_batch: u64,
}

impl Register {
    /// Creates an empty register with a fixed discount rate.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{DiscountRate, Register};
    ///
    /// let register = Register::new(DiscountRate::from_percentage(20.0).unwrap());
    /// assert_eq!(register.discount().percentage(), 20.0);
    /// assert_eq!(register.total(), 0.0);
    /// assert!(register.is_empty());
    /// ```
    pub fn new(discount: DiscountRate) -> Self {
        Register {
            discount,
            ..Register::default()
        }
    }

    /// Rings up `quantity` units of `title` at `price` each.
    ///
    /// The title is recorded once per unit and the price is added to the
    /// total once per unit, never multiplied.
    ///
    /// ## Errors
    /// - `CoreError::Validation` for a blank title, a negative or non-finite
    ///   price, or a quantity below 1
    /// - `CoreError::TotalOutOfRange` if the total would overflow to infinity
    ///
    /// The register is untouched when an error is returned.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::Register;
    ///
    /// let mut register = Register::default();
    /// register.add_item("book", 5.00, 3).unwrap();
    /// assert_eq!(register.total(), 15.0);
    /// assert_eq!(register.items(), vec!["book", "book", "book"]);
    /// ```
    pub fn add_item(&mut self, title: &str, price: f64, quantity: i64) -> CoreResult<()> {
        validate_title(title)?;
        validate_price(price)?;
        validate_quantity(quantity)?;

        let price = Amount::from_dollars(price);
        let mut total = self.total;
        for _ in 0..quantity {
            total += price;
        }
        if !total.is_finite() {
            return Err(CoreError::TotalOutOfRange {
                title: title.to_string(),
            });
        }

        let batch = self.next_batch;
        self.next_batch += 1;
        self.entries.extend((0..quantity).map(|_| Entry {
            title: title.to_string(),
            price,
            batch,
        }));
        self.total = total;

        debug!(
            title,
            price = price.dollars(),
            quantity,
            total = self.total.dollars(),
            "Item added"
        );
        Ok(())
    }

    /// Rings up a single unit. Shorthand for `add_item(title, price, 1)`.
    pub fn add_one(&mut self, title: &str, price: f64) -> CoreResult<()> {
        self.add_item(title, price, 1)
    }

    /// Applies the register's discount to the current total.
    ///
    /// Sends exactly one notice to `sink` in both branches:
    /// - rate > 0: `After the discount, the total comes to $D.CC.`
    /// - rate = 0: `There is no discount to apply.`
    ///
    /// Calling this again discounts the already discounted total.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{DiscountRate, Register};
    ///
    /// let mut register = Register::new(DiscountRate::from_percentage(20.0).unwrap());
    /// register.add_one("macbook air", 1000.0).unwrap();
    ///
    /// let mut notices: Vec<String> = Vec::new();
    /// register.apply_discount(&mut notices);
    ///
    /// assert_eq!(register.total(), 800.0);
    /// assert_eq!(notices, vec!["After the discount, the total comes to $800.00."]);
    /// ```
    pub fn apply_discount<S: NoticeSink + ?Sized>(&mut self, sink: &mut S) -> DiscountOutcome {
        let outcome = if self.discount.is_active() {
            self.total = self.total.discounted(self.discount);
            DiscountOutcome::Applied { total: self.total }
        } else {
            DiscountOutcome::NoDiscount
        };

        debug!(
            discount = self.discount.percentage(),
            total = self.total.dollars(),
            applied = matches!(outcome, DiscountOutcome::Applied { .. }),
            "Discount requested"
        );
        sink.notice(&outcome.to_string());
        outcome
    }

    /// Removes the most recent unit and takes its price off the total.
    ///
    /// ## Reset Rule
    /// After the pop, the total is forced to exactly 0.0 when every
    /// remaining unit came from the same `add_item` call as the voided one.
    /// With nothing left this is the plain "empty register" reset; with
    /// units left it means voiding one unit of a lone multi-quantity
    /// purchase zeroes the total:
    ///
    /// ```rust
    /// use till_core::Register;
    ///
    /// let mut register = Register::default();
    /// register.add_item("tomato", 1.76, 2).unwrap();
    /// register.void_last_transaction();
    ///
    /// assert_eq!(register.items(), vec!["tomato"]);
    /// assert_eq!(register.total(), 0.0);
    /// ```
    ///
    /// Returns the voided title, or `None` on an empty register.
    pub fn void_last_transaction(&mut self) -> Option<String> {
        let entry = self.entries.pop()?;
        self.total -= entry.price;

        if self.entries.iter().all(|e| e.batch == entry.batch) {
            self.total = Amount::zero();
        }

        debug!(
            title = entry.title.as_str(),
            price = entry.price.dollars(),
            remaining = self.entries.len(),
            total = self.total.dollars(),
            "Transaction voided"
        );
        Some(entry.title)
    }

    /// The discount rate fixed at construction.
    #[inline]
    pub fn discount(&self) -> DiscountRate {
        self.discount
    }

    /// The running total.
    #[inline]
    pub fn total(&self) -> Amount {
        self.total
    }

    /// Purchased titles, one per unit, oldest first.
    pub fn items(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }

    /// Number of units currently rung up.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Checks if nothing is rung up.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Register summary for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSummary {
    pub item_count: usize,
    pub discount_percent: f64,
    pub total: Amount,
}

impl From<&Register> for RegisterSummary {
    fn from(register: &Register) -> Self {
        RegisterSummary {
            item_count: register.item_count(),
            discount_percent: register.discount().percentage(),
            total: register.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn discounted_register(pct: f64) -> Register {
        Register::new(DiscountRate::from_percentage(pct).unwrap())
    }

    #[test]
    fn test_new_register_attributes() {
        let plain = Register::default();
        assert_eq!(plain.discount().percentage(), 0.0);
        assert_eq!(plain.total(), 0.0);

        let with_discount = discounted_register(20.0);
        assert_eq!(with_discount.discount().percentage(), 20.0);
        assert_eq!(with_discount.total(), 0.0);
    }

    #[test]
    fn test_add_item() {
        let mut register = Register::default();
        register.add_one("eggs", 0.98).unwrap();
        assert_eq!(register.total(), 0.98);
    }

    #[test]
    fn test_add_item_with_quantity() {
        let mut register = Register::default();
        register.add_item("book", 5.00, 3).unwrap();
        assert_eq!(register.total(), 15.0);
        assert_eq!(register.item_count(), 3);
    }

    #[test]
    fn test_add_multiple_items() {
        let mut register = Register::default();

        register.add_one("Lucky Charms", 4.5).unwrap();
        assert_eq!(register.total(), 4.5);

        register.add_one("Ritz Crackers", 5.0).unwrap();
        assert_eq!(register.total(), 9.5);

        register
            .add_item("Justin's Peanut Butter Cups", 2.50, 2)
            .unwrap();
        assert_eq!(register.total(), 14.5);
    }

    #[test]
    fn test_quantity_is_summed_not_multiplied() {
        let mut register = Register::default();
        register.add_item("gum", 0.1, 6).unwrap();

        // six additions land on 0.6; 0.1 * 6.0 is 0.6000000000000001
        assert_eq!(register.total(), 0.6);
        assert_ne!(register.total(), 0.1 * 6.0);
    }

    #[test]
    fn test_apply_discount() {
        let mut register = discounted_register(20.0);
        register.add_one("macbook air", 1000.0).unwrap();

        let mut notices: Vec<String> = Vec::new();
        let outcome = register.apply_discount(&mut notices);

        assert_eq!(register.total(), 800.0);
        assert_eq!(
            outcome,
            DiscountOutcome::Applied {
                total: Amount::from_dollars(800.0)
            }
        );
        assert_eq!(
            notices,
            vec!["After the discount, the total comes to $800.00."]
        );
    }

    #[test]
    fn test_apply_discount_when_no_discount() {
        let mut register = Register::default();
        register.add_one("eggs", 1.99).unwrap();

        let mut notices: Vec<String> = Vec::new();
        let outcome = register.apply_discount(&mut notices);

        assert_eq!(outcome, DiscountOutcome::NoDiscount);
        assert_eq!(register.total(), 1.99);
        assert_eq!(notices, vec!["There is no discount to apply."]);
    }

    #[test]
    fn test_apply_discount_twice_compounds() {
        let mut register = discounted_register(20.0);
        register.add_one("macbook air", 1000.0).unwrap();

        let mut notices: Vec<String> = Vec::new();
        register.apply_discount(&mut notices);
        register.apply_discount(&mut notices);

        assert_eq!(register.total(), 640.0);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1], "After the discount, the total comes to $640.00.");
    }

    #[test]
    fn test_apply_discount_on_empty_register() {
        let mut register = discounted_register(20.0);
        let mut notices: Vec<String> = Vec::new();
        register.apply_discount(&mut notices);

        assert_eq!(register.total(), 0.0);
        assert_eq!(notices, vec!["After the discount, the total comes to $0.00."]);
    }

    #[test]
    fn test_discount_leaves_items_alone() {
        let mut register = discounted_register(50.0);
        register.add_item("eggs", 2.0, 2).unwrap();
        register.apply_discount(&mut Vec::<String>::new());

        assert_eq!(register.total(), 2.0);
        assert_eq!(register.items(), vec!["eggs", "eggs"]);
    }

    #[test]
    fn test_void_after_discount_can_go_negative() {
        let mut register = discounted_register(50.0);
        register.add_one("candy", 1.0).unwrap();
        register.add_one("cheese", 10.0).unwrap();

        let mut notices: Vec<String> = Vec::new();
        register.apply_discount(&mut notices);
        assert_eq!(register.total(), 5.5);

        // different batches, so no reset: 5.5 - 10.0
        assert_eq!(register.void_last_transaction().as_deref(), Some("cheese"));
        assert_eq!(register.total(), -4.5);

        register.apply_discount(&mut notices);
        assert_eq!(register.total(), -2.25);
        assert_eq!(
            notices[1],
            "After the discount, the total comes to $-2.25."
        );
    }

    #[test]
    fn test_items_without_multiples() {
        let mut register = Register::default();
        register.add_one("eggs", 1.99).unwrap();
        register.add_one("tomato", 1.76).unwrap();
        assert_eq!(register.items(), vec!["eggs", "tomato"]);
    }

    #[test]
    fn test_items_with_multiples() {
        let mut register = Register::default();
        register.add_item("eggs", 1.99, 2).unwrap();
        register.add_item("tomato", 1.76, 3).unwrap();
        assert_eq!(
            register.items(),
            vec!["eggs", "eggs", "tomato", "tomato", "tomato"]
        );
    }

    #[test]
    fn test_void_last_transaction() {
        let mut register = Register::default();
        register.add_one("apple", 0.99).unwrap();
        register.add_one("tomato", 1.76).unwrap();

        let voided = register.void_last_transaction();

        assert_eq!(voided.as_deref(), Some("tomato"));
        assert_eq!(register.total(), 0.99);
        assert_eq!(register.items(), vec!["apple"]);
    }

    #[test]
    fn test_void_last_transaction_with_multiples() {
        let mut register = Register::default();
        register.add_item("tomato", 1.76, 2).unwrap();

        register.void_last_transaction();

        assert_eq!(register.total(), 0.0);
        assert_eq!(register.items(), vec!["tomato"]);
    }

    #[test]
    fn test_void_multiples_after_earlier_purchase_subtracts_price() {
        let mut register = Register::default();
        register.add_one("apple", 1.0).unwrap();
        register.add_item("tomato", 2.0, 2).unwrap();

        register.void_last_transaction();
        assert_eq!(register.total(), 3.0);

        register.void_last_transaction();
        assert_eq!(register.total(), 1.0);
        assert_eq!(register.items(), vec!["apple"]);
    }

    #[test]
    fn test_void_until_empty_resets_total() {
        let mut register = Register::default();
        register.add_one("a", 0.1).unwrap();
        register.add_one("b", 0.2).unwrap();

        register.void_last_transaction();
        register.void_last_transaction();

        assert!(register.is_empty());
        assert_eq!(register.total(), 0.0);
        assert!(register.total().dollars().is_sign_positive());
    }

    #[test]
    fn test_void_on_empty_register_is_noop() {
        let mut register = Register::default();
        assert_eq!(register.void_last_transaction(), None);
        assert_eq!(register.total(), 0.0);
        assert!(register.items().is_empty());
    }

    #[test]
    fn test_total_never_negative_across_voids() {
        let mut register = Register::default();
        register.add_item("tomato", 1.76, 3).unwrap();

        while register.void_last_transaction().is_some() {
            assert!(register.total().dollars() >= 0.0);
        }
        assert_eq!(register.total(), 0.0);
    }

    #[test]
    fn test_invalid_input_leaves_register_untouched() {
        let mut register = Register::default();
        register.add_one("eggs", 0.98).unwrap();

        let err = register.add_one("", 1.0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
        assert!(register.add_one("milk", -1.0).is_err());
        assert!(register.add_item("milk", 1.0, 0).is_err());
        assert!(register.add_one("milk", f64::NAN).is_err());

        assert_eq!(register.total(), 0.98);
        assert_eq!(register.items(), vec!["eggs"]);
    }

    #[test]
    fn test_large_inputs_are_accepted() {
        let mut register = discounted_register(150.0);
        register.add_item("napkin", 0.5, 1000).unwrap();
        register.add_one(&"A".repeat(201), 0.0).unwrap();

        assert_eq!(register.item_count(), 1001);
        assert_eq!(register.total(), 500.0);

        let mut notices: Vec<String> = Vec::new();
        register.apply_discount(&mut notices);
        assert_eq!(register.total(), -250.0);
        assert_eq!(
            notices,
            vec!["After the discount, the total comes to $-250.00."]
        );
    }

    #[test]
    fn test_total_out_of_range() {
        let mut register = Register::default();
        let err = register.add_item("yacht", f64::MAX, 2).unwrap_err();

        assert!(matches!(err, CoreError::TotalOutOfRange { .. }));
        assert!(register.is_empty());
        assert_eq!(register.total(), 0.0);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let mut register = discounted_register(10.0);
        register.add_item("eggs", 1.5, 2).unwrap();

        let json = serde_json::to_value(RegisterSummary::from(&register)).unwrap();
        assert_eq!(json["itemCount"], 2);
        assert_eq!(json["discountPercent"], 10.0);
        assert_eq!(json["total"], 3.0);
    }
}
