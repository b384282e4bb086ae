//! mcstat CLI - Monte-Carlo sampling and integration from the command line
//!
//! # Commands
//!
//! - `mcstat generate <kind> -n <count>` - Draw a sample from a generator
//! - `mcstat integrate <hom|crude> --function <f>` - Estimate an integral
//! - `mcstat summary <file>` - Describe a stored sample
//!
//! # Configuration
//!
//! Defaults come from `mcstat.toml` (see [`config`]) overridden by
//! `MCSTAT_*` environment variables, then by command-line flags. Logs go to
//! stderr; `RUST_LOG` takes precedence over the configured level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod functions;

pub use error::{CliError, Result};

use commands::generate::GenerateArgs;
use commands::integrate::IntegrateArgs;
use config::McstatConfig;

/// Monte-Carlo variate generation and integration
#[derive(Parser)]
#[command(name = "mcstat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "mcstat.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a sample from one of the generators
    Generate(GenerateArgs),

    /// Estimate a definite integral of a built-in function
    Integrate(IntegrateArgs),

    /// Print descriptive statistics of a sample file
    Summary {
        /// Sample file, one value per line
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = McstatConfig::load_or_default(&cli.config)?.with_env_override()?;
    config.validate()?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Generate(args) => commands::generate::run(&args, &config),
        Commands::Integrate(args) => commands::integrate::run(&args, &config),
        Commands::Summary { file } => commands::summary::run(&file),
    }
}
