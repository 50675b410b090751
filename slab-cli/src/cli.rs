//! Command-line definition for `slab-tax`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

/// Slab income tax estimator.
///
/// Estimates tax owed on an annual income under the slab schedule, with the
/// optional standard deduction for salaried filers.
#[derive(Debug, Parser)]
#[command(name = "slab-tax", version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "SLAB_TAX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,slab_core=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append log records to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate tax on one income
    Estimate(EstimateArgs),

    /// Show the slab schedule
    Slabs,

    /// Estimate every income in a CSV file
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Gross annual income, e.g. `1500000`, `15,00,000` or `₹15,00,000`
    #[arg(allow_hyphen_values = true)]
    pub income: String,

    #[command(flatten)]
    pub salaried: SalariedArgs,

    /// Also print the slab schedule (text output only)
    #[arg(long)]
    pub show_slabs: bool,

    /// Output format (defaults to the config file, then `text`)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// CSV file with an `income` column and an optional `salaried` column
    pub file: PathBuf,

    /// Output format (defaults to the config file, then `text`)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct SalariedArgs {
    /// Apply the ₹75,000 standard deduction for salaried filers
    #[arg(long, overrides_with = "no_salaried")]
    pub salaried: bool,

    /// Do not apply the standard deduction, even if the config enables it
    #[arg(long, overrides_with = "salaried")]
    pub no_salaried: bool,
}

impl SalariedArgs {
    /// Resolves the flag pair against the configured default.
    pub fn resolve(
        self,
        default: bool,
    ) -> bool {
        match (self.salaried, self.no_salaried) {
            (true, _) => true,
            (_, true) => false,
            _ => default,
        }
    }
}
