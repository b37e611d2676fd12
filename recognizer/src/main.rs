//! hand-gesture - static hand gesture recognition from 2D landmarks
//!
//! Generates synthetic landmark sets for the built-in test gestures,
//! classifies each one, and prints the result.

pub mod gesture;
mod report;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use gesture::GestureClassifier;
use report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "hand-gesture", about = "Static hand gesture recognizer")]
struct Cli {
    /// Test gesture to classify (repeatable). Defaults to all built-in gestures.
    #[arg(long = "gesture", value_name = "NAME")]
    gestures: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show version and exit
    #[arg(long)]
    version: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("hand-gesture {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hand_gesture=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    info!("hand-gesture v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("thresholds: {}", GestureClassifier::new().config_sexp());

    let gestures = if cli.gestures.is_empty() {
        report::default_gestures()
    } else {
        cli.gestures
    };

    let results = report::run(&gestures);

    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &results, cli.format)
        .context("failed to write report to stdout")?;

    Ok(())
}
