use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Bracket;

/// Tax owed from a single slab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    pub label: String,
    pub floor: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}

impl BracketContribution {
    pub fn new(
        bracket: &Bracket,
        amount: Decimal,
    ) -> Self {
        Self {
            label: bracket.label(),
            floor: bracket.floor,
            rate: bracket.rate,
            amount,
        }
    }
}

/// Output of one slab calculation.
///
/// `breakdown` is ordered lowest slab first and its amounts sum to
/// `total_tax`. An exempt income produces an empty breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_tax: Decimal,
    pub breakdown: Vec<BracketContribution>,
}

impl CalculationResult {
    /// Result for income at or below the exemption ceiling.
    pub fn exempt() -> Self {
        Self::default()
    }

    pub fn is_exempt(&self) -> bool {
        self.breakdown.is_empty()
    }

    /// Sum of the per-slab amounts.
    pub fn breakdown_total(&self) -> Decimal {
        self.breakdown.iter().map(|c| c.amount).sum()
    }
}
