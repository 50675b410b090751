use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

pub use slab_core::format_inr;

/// Error returned when income text cannot be turned into an amount.
///
/// The calculator is never invoked with such input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid income '{input}': {reason}")]
    InvalidInput { input: String, reason: String },
}

impl InputError {
    fn invalid(
        input: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Normalizes income input: trims whitespace, drops a leading rupee sign and
/// removes `,` and `_` digit separators.
fn normalize_income_input(s: &str) -> String {
    let trimmed = s.trim();
    let unprefixed = trimmed.strip_prefix('₹').unwrap_or(trimmed);
    unprefixed
        .trim_start()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect()
}

/// Parses income text into a [`Decimal`].
///
/// Accepts Indian or Western grouping (`15,00,000`, `1,500,000`), an
/// optional leading `₹` and a sign. Empty input is rejected.
pub fn parse_income(s: &str) -> Result<Decimal, InputError> {
    let normalized = normalize_income_input(s);
    if normalized.is_empty() {
        return Err(InputError::invalid(s, "no amount entered"));
    }
    normalized.parse().map_err(|e: rust_decimal::Error| {
        tracing::warn!(input = %s, "invalid income: {}", e);
        InputError::invalid(s, e.to_string())
    })
}

/// Parses a salaried flag. Empty input means not salaried; unrecognised
/// input yields `None`.
pub fn parse_salaried(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Some(false),
        "true" | "yes" | "y" | "1" => Some(true),
        _ => None,
    }
}

/// Formats an optional percentage with two decimals, using "—" when `None`.
pub fn format_percent(rate: Option<Decimal>) -> String {
    rate.map(|r| {
        let rounded = r.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}%")
    })
    .unwrap_or_else(|| "—".to_string())
}
