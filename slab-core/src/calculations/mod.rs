//! Slab tax calculations.
//!
//! [`TaxCalculator`] holds the schedule; [`compute`] runs it against the
//! built-in [`SLAB_SCHEDULE`](crate::SLAB_SCHEDULE).

pub mod common;
pub mod slab_tax;

pub use slab_tax::{TaxCalculator, compute};
