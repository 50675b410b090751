//! Slab-based income tax estimation.
//!
//! The crate exposes a single pure calculation, [`TaxCalculator::compute`],
//! that maps a gross annual income and a salaried flag to the total tax owed
//! and a per-slab breakdown. Everything else (input parsing, rendering) is
//! left to the caller.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use slab_core::compute;
//!
//! let result = compute(dec!(1500000), false);
//!
//! assert_eq!(result.total_tax, dec!(105000));
//! assert_eq!(result.breakdown.len(), 4);
//! assert_eq!(result.breakdown[3].label, "₹12,00,000 - ₹16,00,000 (15%)");
//! assert_eq!(result.breakdown[3].amount, dec!(45000));
//! ```

pub mod calculations;
pub mod currency;
pub mod models;

pub use calculations::{TaxCalculator, compute};
pub use currency::format_inr;
pub use models::*;
