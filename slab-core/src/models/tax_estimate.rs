use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationResult;

/// Everything a result panel shows for one income: the slab calculation plus
/// the figures derived around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEstimate {
    pub gross_income: Decimal,
    pub is_salaried: bool,

    /// Deduction applied before the slabs; `None` for non-salaried filers.
    pub standard_deduction: Option<Decimal>,
    pub taxable_income: Decimal,

    pub result: CalculationResult,

    /// `total_tax / gross_income` as a percentage, unrounded.
    /// `None` when gross income is zero or negative.
    pub effective_rate: Option<Decimal>,
}

impl TaxEstimate {
    pub fn total_tax(&self) -> Decimal {
        self.result.total_tax
    }
}
