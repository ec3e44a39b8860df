#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use fieldcheck_config::{Config, LoggingConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod command;

use command::{
    CheckInput, CheckStrategy, CommandStrategy, FormInput, FormStrategy, InitStrategy,
    KindsStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(about = "Validate and normalize form field values", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/fieldcheck/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one value and print its normalized form
    Check {
        /// Field kind: name, group, tg, vk, email, phone, password, id
        kind: String,
        /// Value to validate
        value: String,
    },
    /// Validate a JSON object of field -> value
    Form {
        /// Path to the JSON file, or `-` for stdin
        source: PathBuf,
    },
    /// List field kinds and their patterns
    Kinds,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

/// Load the config for this run.
///
/// An explicit `--config` must load for every command. A broken default
/// config is handed back unresolved so only commands that need it fail.
fn resolve_config(path: Option<&Path>) -> anyhow::Result<anyhow::Result<Config>> {
    let config = Config::load_or_default(path);
    if path.is_some() {
        return config.map(Ok);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref())?;
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.as_ref().map_or_else(
            |_| LoggingConfig::default().level,
            |config| config.logging.level.clone(),
        )
    };
    init_tracing(&level)?;

    match cli.command {
        Commands::Check { kind, value } => CheckStrategy.execute(CheckInput { kind, value }),
        Commands::Form { source } => FormStrategy.execute(FormInput {
            source,
            config: config?,
        }),
        Commands::Kinds => KindsStrategy.execute(()),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
