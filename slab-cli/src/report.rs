//! Rendering of estimates and the slab reference table.

use std::io::Write;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use slab_core::{Bracket, TaxEstimate};
use thiserror::Error;

use crate::config::OutputFormat;
use crate::utils::{format_inr, format_percent};

pub const DISCLAIMER: &str = "Disclaimer: This calculator provides estimates only and should not be \
used for official tax filing purposes. Tax calculations can be complex and may vary based on \
individual circumstances, deductions, and exemptions. Please consult a tax professional or refer \
to the official Income Tax Department website for accurate tax assessment.";

pub const TITLE: &str = "Income Tax Calculator";

pub const SLAB_NOTE: &str = "Note: This is a simplified representation of tax slabs. Actual tax \
calculation may vary based on various factors and deductions.";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Flat per-income summary used for CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub row: usize,
    pub income: Decimal,
    pub salaried: bool,
    pub taxable_income: Decimal,
    /// Always two decimals, so exempt and taxed rows share one scale.
    pub total_tax: Decimal,
    /// Two decimals; empty when undefined.
    pub effective_rate: Option<Decimal>,
}

impl SummaryRow {
    pub fn new(
        row: usize,
        estimate: &TaxEstimate,
    ) -> Self {
        Self {
            row,
            income: estimate.gross_income,
            salaried: estimate.is_salaried,
            taxable_income: estimate.taxable_income,
            total_tax: two_places(estimate.total_tax()),
            effective_rate: estimate.effective_rate.map(two_places),
        }
    }
}

/// Rounds half away from zero and pads to exactly two decimal places.
fn two_places(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    row: usize,
    #[serde(flatten)]
    estimate: &'a TaxEstimate,
}

/// Writes one estimate in the requested format.
pub fn write_estimate<W: Write>(
    out: &mut W,
    estimate: &TaxEstimate,
    format: OutputFormat,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => write_estimate_text(out, estimate)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, estimate)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_summary_csv(out, &[SummaryRow::new(1, estimate)])?,
    }
    Ok(())
}

/// Writes a batch of `(row, estimate)` pairs in the requested format.
pub fn write_batch<W: Write>(
    out: &mut W,
    estimates: &[(usize, TaxEstimate)],
    format: OutputFormat,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => write_batch_text(out, estimates)?,
        OutputFormat::Json => {
            let entries: Vec<BatchEntry<'_>> = estimates
                .iter()
                .map(|(row, estimate)| BatchEntry {
                    row: *row,
                    estimate,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<SummaryRow> = estimates
                .iter()
                .map(|(row, estimate)| SummaryRow::new(*row, estimate))
                .collect();
            write_summary_csv(out, &rows)?;
        }
    }
    Ok(())
}

/// Writes the slab reference table.
pub fn write_slab_info<W: Write>(
    out: &mut W,
    brackets: &[Bracket],
) -> Result<(), ReportError> {
    writeln!(out, "Tax Slabs")?;
    for bracket in brackets {
        writeln!(out, "  {}", bracket.summary())?;
    }
    writeln!(out)?;
    writeln!(out, "{SLAB_NOTE}")?;
    Ok(())
}

fn write_estimate_text<W: Write>(
    out: &mut W,
    estimate: &TaxEstimate,
) -> std::io::Result<()> {
    writeln!(out, "{DISCLAIMER}")?;
    writeln!(out)?;
    writeln!(out, "{TITLE}")?;
    writeln!(out)?;
    writeln!(out, "Tax Calculation Result")?;
    writeln!(out, "Gross Income: {}", format_inr(estimate.gross_income))?;
    if let Some(deduction) = estimate.standard_deduction {
        writeln!(out, "Standard Deduction: {}", format_inr(deduction))?;
        writeln!(out, "Taxable Income: {}", format_inr(estimate.taxable_income))?;
    }
    writeln!(out)?;
    writeln!(out, "Total Tax: {}", format_inr(estimate.total_tax()))?;
    writeln!(out, "Effective Tax Rate: {}", format_percent(estimate.effective_rate))?;

    let breakdown = &estimate.result.breakdown;
    if breakdown.is_empty() {
        return Ok(());
    }

    let amounts: Vec<String> = breakdown.iter().map(|c| format_inr(c.amount)).collect();
    let label_width = breakdown.iter().map(|c| c.label.chars().count()).max().unwrap_or(0);
    let amount_width = amounts.iter().map(|a| a.chars().count()).max().unwrap_or(0);

    writeln!(out)?;
    writeln!(out, "Tax Breakdown")?;
    for (contribution, amount) in breakdown.iter().zip(&amounts) {
        writeln!(
            out,
            "  {:<label_width$}  {:>amount_width$}",
            contribution.label, amount
        )?;
    }
    Ok(())
}

fn write_batch_text<W: Write>(
    out: &mut W,
    estimates: &[(usize, TaxEstimate)],
) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<5} {:>16} {:<8} {:>16} {:>14} {:>9}",
        "Row", "Income", "Salaried", "Taxable", "Tax", "Effective"
    )?;
    for (row, estimate) in estimates {
        writeln!(
            out,
            "{:<5} {:>16} {:<8} {:>16} {:>14} {:>9}",
            row,
            format_inr(estimate.gross_income),
            if estimate.is_salaried { "yes" } else { "no" },
            format_inr(estimate.taxable_income),
            format_inr(estimate.total_tax()),
            format_percent(estimate.effective_rate),
        )?;
    }
    Ok(())
}

fn write_summary_csv<W: Write>(
    out: &mut W,
    rows: &[SummaryRow],
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
