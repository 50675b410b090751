//! Command dispatch for the `slab-tax` binary.

use std::io::Write;

use anyhow::{Context, Result};
use slab_core::TaxCalculator;
use tracing::{debug, info};

use crate::cli::{BatchArgs, Command, EstimateArgs};
use crate::config::{Config, OutputFormat};
use crate::csv_loader;
use crate::report;
use crate::state::EstimatorSession;

/// Runs one command, writing its report to `out`.
pub fn run<W: Write>(
    command: &Command,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let calculator = TaxCalculator::default();

    match command {
        Command::Estimate(args) => estimate(&calculator, args, config, out),
        Command::Slabs => {
            report::write_slab_info(out, calculator.brackets())?;
            Ok(())
        }
        Command::Batch(args) => batch(&calculator, args, config, out),
    }
}

fn estimate<W: Write>(
    calculator: &TaxCalculator<'_>,
    args: &EstimateArgs,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let format = args.format.unwrap_or(config.format);

    let mut session = EstimatorSession::new();
    session.set_income(args.income.as_str());
    session.set_salaried(args.salaried.resolve(config.salaried));
    if args.show_slabs {
        session.toggle_slab_info();
    }

    debug!(
        income = session.income_text(),
        salaried = session.is_salaried(),
        show_slabs = session.show_slab_info(),
        "estimating"
    );

    let estimate = session
        .calculate(calculator)
        .context("no estimate produced")?;
    report::write_estimate(out, estimate, format)?;

    if session.show_slab_info() && format == OutputFormat::Text {
        writeln!(out)?;
        report::write_slab_info(out, calculator.brackets())?;
    }
    Ok(())
}

fn batch<W: Write>(
    calculator: &TaxCalculator<'_>,
    args: &BatchArgs,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let records = csv_loader::load_from_file(&args.file)
        .with_context(|| format!("failed to load incomes from {}", args.file.display()))?;

    info!(rows = records.len(), file = %args.file.display(), "estimating batch");

    let estimates: Vec<_> = records
        .iter()
        .map(|record| {
            (
                record.row,
                calculator.estimate(record.income, record.is_salaried),
            )
        })
        .collect();

    report::write_batch(out, &estimates, args.format.unwrap_or(config.format))?;
    Ok(())
}
