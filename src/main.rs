//! Command-line entry point for the parking-lot interpreter.
//!
//! Reads commands from a file or standard input, one per line, and writes one
//! response line per command to standard output.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use carpark::config::AppConfig;
use carpark::manager::Manager;
use carpark::repl;
use carpark::util::telemetry;

/// Fixed-capacity parking lot driven by a line-oriented command protocol.
#[derive(Debug, Parser)]
#[command(name = "carpark", version, about)]
struct Cli {
    /// Command file to execute; reads standard input when omitted.
    commands: Option<PathBuf>,

    /// Path to a JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with a lot of the configured default capacity already created.
    #[arg(long)]
    precreate: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            AppConfig::from_json_str(&raw).map_err(|e| anyhow!(e))?
        }
        None => AppConfig::default(),
    };

    let default_capacity = config.lot.default_capacity;
    let mut manager = Manager::with_config(config.lot);
    if cli.precreate {
        manager.create_parking_lot(default_capacity);
    }
    let stdout = io::stdout().lock();
    match &cli.commands {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open command file {}", path.display()))?;
            repl::run(&mut manager, BufReader::new(file), stdout)
        }
        None => repl::run(&mut manager, io::stdin().lock(), stdout),
    }
}
