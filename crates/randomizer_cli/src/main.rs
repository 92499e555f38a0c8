//! Randomizer CLI - prints pseudo-random bounded integers.
//!
//! Invoked without arguments it seeds from the current time and prints ten
//! `next_int(100)` draws, one per line.

use clap::Parser;
use randomizer_cli::commands;
use randomizer_cli::config::{build_config, CliArgs};
use randomizer_cli::Result;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Randomizer - textbook linear congruential generator demo
#[derive(Parser, Debug)]
#[command(name = "randomizer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed: `clock` or an integer
    #[arg(short, long, allow_hyphen_values = true)]
    seed: Option<String>,

    /// Number of values to print
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Upper bound passed to every draw
    #[arg(short, long, allow_negative_numbers = true)]
    max: Option<i32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for CliArgs {
    fn from(args: Args) -> Self {
        CliArgs {
            config_file: args.config,
            seed: args.seed,
            count: args.count,
            max: args.max,
            log_level: args.log_level,
            verbose: args.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli_args: CliArgs = Args::parse().into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        version = randomizer_cli::VERSION,
        seed = %config.seed,
        count = config.count,
        max = config.max,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    commands::draw::run(&config, &mut out)?;

    Ok(())
}
