//! MqXliff CLI - Command-line interface for memoQ XLIFF files

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;

use crate::config::load_config_or_default;

#[derive(Parser)]
#[command(name = "mqxliff")]
#[command(about = "MqXliff: inspect and edit memoQ bilingual XLIFF files", long_about = None)]
#[command(version)]
struct Cli {
    /// Codec settings file (defaults to ./mqxliff.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Run the MqXliff CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config_or_default(cli.config.as_deref())?;
    cli.command.execute(&config)?;

    Ok(())
}
