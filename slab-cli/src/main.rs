use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use slab_cli::app;
use slab_cli::cli::Cli;
use slab_cli::config::Config;
use slab_cli::logging::{self, LogSettings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path).context("failed to load configuration")?,
        None => Config::default(),
    };

    logging::init(&LogSettings {
        level: cli.log_level.clone(),
        config_level: config.log_level.clone(),
        file: cli.log_file.clone().or_else(|| config.log_file.clone()),
    })?;

    debug!(?config, "configuration resolved");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&cli.command, &config, &mut out)
}
