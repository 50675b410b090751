mod bracket;
mod calculation_result;
mod tax_estimate;

pub use bracket::{Bracket, EXEMPTION_CEILING, SLAB_SCHEDULE, STANDARD_DEDUCTION};
pub use calculation_result::{BracketContribution, CalculationResult};
pub use tax_estimate::TaxEstimate;
