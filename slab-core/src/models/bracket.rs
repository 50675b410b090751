use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::currency::format_inr;

/// Flat deduction for salaried filers, subtracted once before the slabs apply.
pub const STANDARD_DEDUCTION: Decimal = dec!(75000);

/// Taxable income at or below this amount owes nothing.
pub const EXEMPTION_CEILING: Decimal = dec!(1200000);

/// The slab schedule, ascending by floor. The top slab has no ceiling.
pub static SLAB_SCHEDULE: [Bracket; 7] = [
    Bracket::new(dec!(0), Some(dec!(400000)), dec!(0)),
    Bracket::new(dec!(400000), Some(dec!(800000)), dec!(0.05)),
    Bracket::new(dec!(800000), Some(dec!(1200000)), dec!(0.10)),
    Bracket::new(dec!(1200000), Some(dec!(1600000)), dec!(0.15)),
    Bracket::new(dec!(1600000), Some(dec!(2000000)), dec!(0.20)),
    Bracket::new(dec!(2000000), Some(dec!(2400000)), dec!(0.25)),
    Bracket::new(dec!(2400000), None, dec!(0.30)),
];

/// A contiguous income range taxed at one marginal rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub floor: Decimal,
    pub ceiling: Option<Decimal>,
    /// Marginal rate as a fraction, e.g. `0.15`.
    pub rate: Decimal,
}

impl Bracket {
    pub const fn new(
        floor: Decimal,
        ceiling: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            floor,
            ceiling,
            rate,
        }
    }

    /// The rate as a whole percentage with no trailing zeros (`15` for `0.15`).
    pub fn rate_percent(&self) -> Decimal {
        (self.rate * Decimal::ONE_HUNDRED).normalize()
    }

    /// Breakdown label, e.g. `₹12,00,000 - ₹16,00,000 (15%)` or
    /// `Above ₹24,00,000 (30%)` for the open-ended slab.
    pub fn label(&self) -> String {
        format!("{} ({}%)", self.range(), self.rate_percent())
    }

    /// Reference-table line, e.g. `₹0 - ₹4,00,000: Nil` or `Above ₹24,00,000: 30%`.
    pub fn summary(&self) -> String {
        if self.rate.is_zero() {
            format!("{}: Nil", self.range())
        } else {
            format!("{}: {}%", self.range(), self.rate_percent())
        }
    }

    fn range(&self) -> String {
        match self.ceiling {
            Some(ceiling) => format!("{} - {}", format_inr(self.floor), format_inr(ceiling)),
            None => format!("Above {}", format_inr(self.floor)),
        }
    }
}
