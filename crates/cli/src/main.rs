//! # powerfuel
//!
//! Writes a table converting between electrical power and production rates
//! of hydrogen, methane, and ammonia by combustion energy content.
//!
//! ```sh
//! cargo run --release -p powerfuel
//! ```
//!
//! With no arguments the table is computed at standard conditions and written
//! to `conversions by energy content.csv` in the working directory. Set
//! `RUST_LOG=debug` to log every per-megawatt factor.

mod config;
mod error;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use powerfuel_table::{build_table, export};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use error::{Error, report};

/// Command-line arguments. Both are optional.
#[derive(Debug, Parser)]
#[command(name = "powerfuel", version, about, long_about = None)]
struct Args {
    /// TOML file with reference conditions and the output path.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the CSV table, overriding the config file.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

/// Builds the table and writes it, returning the path written.
fn run(args: &Args) -> Result<PathBuf, Error> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let constants = config.conditions.constants()?;
    info!(
        gas_constant = config.conditions.gas_constant,
        temperature = config.conditions.temperature,
        pressure = config.conditions.pressure,
        "reference conditions"
    );

    let table = build_table(&constants)?;

    let output = args.output.clone().unwrap_or(config.output);
    export(&table, &output)?;

    Ok(output)
}
