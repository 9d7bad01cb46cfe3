//! candump comparison CLI
//!
//! Reads a candump log holding the captures of both ends of a link and
//! prints how many frames were lost, duplicated, corrupted or delivered
//! correctly, together with the round-trip delay.
//!
//! ```text
//! candump -l vcan0 vcan1          # capture both ends into one log
//! candump-compare candump.log     # compare
//! ```

use anyhow::{Context, Result};
use candump_compare::Comparator;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, OutputFormat};

/// Compare both ends of a CAN tunnel from a candump log
#[derive(Parser, Debug)]
#[command(name = "candump-compare")]
#[command(about = "Measure loss, duplication, corruption and delay from a candump log", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the candump log containing both interfaces
    #[arg(value_name = "LOG")]
    log: PathBuf,

    /// Report format (default: txt)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to configuration file (TOML) with filters and output settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::debug!("candump-compare v{}", candump_compare::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let format = args
        .format
        .or(app_config.output.format)
        .unwrap_or_default();

    let comparator = Comparator::new(app_config.compare_config());
    let stats = comparator
        .compare_file(&args.log)
        .with_context(|| format!("Failed to compare log file: {:?}", args.log))?;

    println!("{}", report::render(&stats, format)?);

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
