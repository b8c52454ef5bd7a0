//! Devmap - Main entry point
//!
//! One-shot resolver: load the hardware declaration file, resolve every
//! entry against the live udev database, write the resulting paths to an
//! env file for the container runtime to consume.

mod env_file;

use anyhow::{Context, Result};
use clap::Parser;
use devmap_core::HardwareConfig;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "devmap")]
#[command(about = "Resolve declared hardware devices to /dev paths")]
#[command(version)]
struct Args {
    /// Path to the hardware declaration file
    #[arg(short, long)]
    config: PathBuf,

    /// File to export the resolved paths to
    #[arg(short, long, default_value = "./.env")]
    output: PathBuf,

    /// Append to the output file instead of overwriting it
    #[arg(short, long)]
    append: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("devmap v{}", env!("CARGO_PKG_VERSION"));

    let config = HardwareConfig::from_file(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let paths = devmap_resolver::resolve_all(&config)?;

    info!(output = %args.output.display(), "Writing resolved paths");
    env_file::write_env_file(&args.output, &paths, args.append)
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!("Done");
    Ok(())
}
