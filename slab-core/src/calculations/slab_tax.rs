//! Marginal slab tax calculation.
//!
//! Tax is computed with the standard subtraction method: starting from the
//! highest slab, the part of the remaining income above each floor is taxed
//! at that slab's rate and the remaining income is clamped to the floor.
//!
//! | Floor       | Rate |
//! |-------------|------|
//! | ₹24,00,000  | 30%  |
//! | ₹20,00,000  | 25%  |
//! | ₹16,00,000  | 20%  |
//! | ₹12,00,000  | 15%  |
//! | ₹8,00,000   | 10%  |
//! | ₹4,00,000   | 5%   |
//! | ₹0          | 0%   |
//!
//! Salaried filers first subtract the ₹75,000 standard deduction (never
//! below zero). Taxable income at or below ₹12,00,000 owes nothing and
//! produces an empty breakdown; above it, the breakdown always lists the
//! lowest slab, even though it contributes nothing.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use slab_core::TaxCalculator;
//!
//! let calculator = TaxCalculator::default();
//! let result = calculator.compute(dec!(2000000), true);
//!
//! assert_eq!(result.total_tax, dec!(185000));
//! assert_eq!(result.breakdown.len(), 5);
//! assert_eq!(result.breakdown[4].amount, dec!(65000));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{max, percentage};
use crate::{
    Bracket, BracketContribution, CalculationResult, EXEMPTION_CEILING, SLAB_SCHEDULE,
    STANDARD_DEDUCTION, TaxEstimate,
};

/// Runs [`TaxCalculator::compute`] against the built-in schedule.
pub fn compute(
    gross_income: Decimal,
    is_salaried: bool,
) -> CalculationResult {
    TaxCalculator::default().compute(gross_income, is_salaried)
}

/// Calculator over a slab schedule.
///
/// The calculator holds no mutable state; one value can serve any number of
/// calculations, from any thread.
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator<'a> {
    brackets: &'a [Bracket],
}

impl Default for TaxCalculator<'static> {
    fn default() -> Self {
        Self::new(&SLAB_SCHEDULE)
    }
}

impl<'a> TaxCalculator<'a> {
    /// Creates a calculator over the given slabs.
    ///
    /// Slabs must be sorted by `floor` in ascending order; the first one is
    /// the slab always listed in a non-exempt breakdown.
    pub fn new(brackets: &'a [Bracket]) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &'a [Bracket] {
        self.brackets
    }

    /// Calculates total tax and the per-slab breakdown for one income.
    pub fn compute(
        &self,
        gross_income: Decimal,
        is_salaried: bool,
    ) -> CalculationResult {
        let taxable_income = self.taxable_income(gross_income, is_salaried);

        if self.is_exempt(taxable_income) {
            debug!(%gross_income, is_salaried, %taxable_income, "income within exemption ceiling");
            return CalculationResult::exempt();
        }

        let breakdown = self.slab_contributions(taxable_income);
        let total_tax = breakdown.iter().map(|c| c.amount).sum();

        debug!(%gross_income, is_salaried, %taxable_income, %total_tax, "slab tax computed");

        CalculationResult {
            total_tax,
            breakdown,
        }
    }

    /// Calculates the slab tax together with the deduction applied, the
    /// taxable income and the effective rate.
    pub fn estimate(
        &self,
        gross_income: Decimal,
        is_salaried: bool,
    ) -> TaxEstimate {
        let result = self.compute(gross_income, is_salaried);
        let effective_rate = percentage(result.total_tax, gross_income);

        TaxEstimate {
            gross_income,
            is_salaried,
            standard_deduction: is_salaried.then_some(STANDARD_DEDUCTION),
            taxable_income: self.taxable_income(gross_income, is_salaried),
            result,
            effective_rate,
        }
    }

    /// Gross income less the standard deduction for salaried filers.
    ///
    /// Only the deducted figure is floored at zero; a non-salaried gross
    /// income passes through unchanged. The subtraction can only overflow
    /// far below zero, where the floor applies anyway.
    pub fn taxable_income(
        &self,
        gross_income: Decimal,
        is_salaried: bool,
    ) -> Decimal {
        if is_salaried {
            gross_income
                .checked_sub(STANDARD_DEDUCTION)
                .map_or(Decimal::ZERO, |taxable| max(taxable, Decimal::ZERO))
        } else {
            gross_income
        }
    }

    pub fn is_exempt(
        &self,
        taxable_income: Decimal,
    ) -> bool {
        taxable_income <= EXEMPTION_CEILING
    }

    /// Walks the slabs from the top down, returning contributions lowest first.
    fn slab_contributions(
        &self,
        taxable_income: Decimal,
    ) -> Vec<BracketContribution> {
        let Some((lowest, upper)) = self.brackets.split_first() else {
            return Vec::new();
        };

        let mut remaining = taxable_income;
        let mut contributions = Vec::with_capacity(self.brackets.len());

        for bracket in upper.iter().rev() {
            if remaining > bracket.floor {
                contributions.push(BracketContribution::new(
                    bracket,
                    self.slab_tax(bracket, remaining),
                ));
                remaining = bracket.floor;
            }
        }

        let lowest_tax = if remaining > lowest.floor {
            self.slab_tax(lowest, remaining)
        } else {
            Decimal::ZERO
        };
        contributions.push(BracketContribution::new(lowest, lowest_tax));

        contributions.reverse();
        contributions
    }

    /// Tax on the part of `remaining` above the slab floor.
    fn slab_tax(
        &self,
        bracket: &Bracket,
        remaining: Decimal,
    ) -> Decimal {
        (remaining - bracket.floor) * bracket.rate
    }
}
