//! Caller-owned estimator state.
//!
//! Holds what a front end keeps between interactions: the raw income text,
//! the salaried toggle, the last estimate and whether the slab information
//! panel is open. Editing either input discards the previous estimate.

use slab_core::{TaxCalculator, TaxEstimate};
use tracing::debug;

use crate::utils::{InputError, parse_income};

#[derive(Debug, Clone, Default)]
pub struct EstimatorSession {
    income_text: String,
    is_salaried: bool,
    estimate: Option<TaxEstimate>,
    show_slab_info: bool,
}

impl EstimatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn income_text(&self) -> &str {
        &self.income_text
    }

    pub fn is_salaried(&self) -> bool {
        self.is_salaried
    }

    /// The last successful estimate, if the inputs have not changed since.
    pub fn estimate(&self) -> Option<&TaxEstimate> {
        self.estimate.as_ref()
    }

    pub fn show_slab_info(&self) -> bool {
        self.show_slab_info
    }

    /// Replace the income text and discard any previous estimate.
    pub fn set_income(
        &mut self,
        text: impl Into<String>,
    ) {
        self.income_text = text.into();
        self.estimate = None;
    }

    /// Change the salaried toggle and discard any previous estimate.
    pub fn set_salaried(
        &mut self,
        is_salaried: bool,
    ) {
        self.is_salaried = is_salaried;
        self.estimate = None;
    }

    pub fn toggle_slab_info(&mut self) {
        self.show_slab_info = !self.show_slab_info;
    }

    /// Parse the current income text and run the calculator.
    ///
    /// On invalid input the calculator is not called and no estimate is held.
    pub fn calculate(
        &mut self,
        calculator: &TaxCalculator<'_>,
    ) -> Result<&TaxEstimate, InputError> {
        let gross_income = match parse_income(&self.income_text) {
            Ok(amount) => amount,
            Err(e) => {
                self.estimate = None;
                return Err(e);
            }
        };

        debug!(%gross_income, is_salaried = self.is_salaried, "calculating estimate");
        let estimate = calculator.estimate(gross_income, self.is_salaried);
        Ok(&*self.estimate.insert(estimate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn calculated(
        income: &str,
        is_salaried: bool,
    ) -> EstimatorSession {
        let mut session = EstimatorSession::new();
        session.set_income(income);
        session.set_salaried(is_salaried);
        session.calculate(&TaxCalculator::default()).unwrap();
        session
    }

    #[test]
    fn new_session_is_empty() {
        let session = EstimatorSession::new();

        assert_eq!(session.income_text(), "");
        assert!(!session.is_salaried());
        assert!(session.estimate().is_none());
        assert!(!session.show_slab_info());
    }

    #[test]
    fn calculate_stores_estimate() {
        let session = calculated("30,00,000", false);

        let estimate = session.estimate().unwrap();
        assert_eq!(estimate.total_tax(), dec!(480000));
        assert_eq!(estimate.gross_income, dec!(3000000));
    }

    #[test]
    fn calculate_uses_salaried_flag() {
        let session = calculated("2000000", true);

        assert_eq!(session.estimate().unwrap().total_tax(), dec!(185000));
    }

    #[test]
    fn editing_income_clears_estimate() {
        let mut session = calculated("2000000", false);

        session.set_income("2000001");

        assert!(session.estimate().is_none());
        assert_eq!(session.income_text(), "2000001");
    }

    #[test]
    fn toggling_salaried_clears_estimate() {
        let mut session = calculated("2000000", false);

        session.set_salaried(true);

        assert!(session.estimate().is_none());
    }

    #[test]
    fn invalid_income_leaves_estimate_absent() {
        let mut session = EstimatorSession::new();
        session.set_income("twelve lakh");

        let result = session.calculate(&TaxCalculator::default());

        assert!(matches!(result, Err(InputError::InvalidInput { .. })));
        assert!(session.estimate().is_none());
    }

    #[test]
    fn toggle_slab_info_flips_panel_without_touching_estimate() {
        let mut session = calculated("1500000", false);

        session.toggle_slab_info();
        assert!(session.show_slab_info());
        assert!(session.estimate().is_some());

        session.toggle_slab_info();
        assert!(!session.show_slab_info());
    }
}
