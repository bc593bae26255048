//! # till-core: Pure Ledger Logic for Till
//!
//! This crate is the **heart** of Till. It holds the register: a running
//! total, one fixed discount rate, and a LIFO purchase history that can be
//! voided one unit at a time.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/till (session binary)                   │   │
//! │  │    stdin lines ──► Command ──► Session ──► stdout              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ register  │  │   money   │  │  notice   │  │ validation│  │   │
//! │  │   │ Register  │  │  Amount   │  │NoticeSink │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STDOUT • NO ENVIRONMENT                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`register`] - The register and its summary
//! - [`money`] - `Amount`, the f64 dollar total
//! - [`types`] - `DiscountRate`, `DiscountOutcome`
//! - [`notice`] - Sink for human-readable status lines
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{DiscountRate, Register};
//!
//! let mut register = Register::new(DiscountRate::from_percentage(20.0).unwrap());
//! register.add_one("apple", 0.99).unwrap();
//! register.add_one("tomato", 1.76).unwrap();
//!
//! assert_eq!(register.void_last_transaction().as_deref(), Some("tomato"));
//! assert_eq!(register.total(), 0.99);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod notice;
pub mod register;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Amount;
pub use notice::NoticeSink;
pub use register::{Register, RegisterSummary};
pub use types::*;
