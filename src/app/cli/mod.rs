//! CLI Adapter.

mod forms;
mod results;
mod wizard;

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{AppConfig, AppError, OutputFormat};

#[derive(Parser)]
#[command(name = "logoforge")]
#[command(version)]
#[command(
    about = "Interactive wizard for generating brand logos with the Runware image API",
    long_about = None
)]
struct Cli {
    /// Path to a config file (defaults to ./logoforge.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Logos per run, 1 to 4 (overrides config)
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Output format, WEBP or PNG (overrides config)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Run in mock mode (no API calls)
    #[arg(long)]
    mock: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(count) = cli.count {
        config.generation.desired_count = count;
    }
    if let Some(format) = &cli.format {
        config.generation.output_format = OutputFormat::parse(format).ok_or_else(|| {
            AppError::config_error(format!("Unknown output format '{}': use WEBP or PNG", format))
        })?;
    }

    wizard::run_wizard(&config, cli.mock)
}
