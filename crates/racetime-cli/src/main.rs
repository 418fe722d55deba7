//! RaceTime
//!
//! Console for recording marathon finishers and comparing their times.

use anyhow::{Context, Result};
use clap::Parser;
use racetime_cli::Console;
use racetime_core::models::Config;
use racetime_core::storage::ConfigStorage;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "racetime")]
#[command(about = "RaceTime - marathon finish time console", long_about = None)]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(short, long)]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Start with an empty race list
    #[arg(long)]
    no_sample_data: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let storage = match &args.config {
        Some(path) => Some(ConfigStorage::new(path)),
        None => ConfigStorage::user_default(),
    };

    let mut config = match storage {
        Some(storage) => storage
            .load()
            .with_context(|| format!("Failed to load config from {}", storage.path().display()))?,
        None => Config::default(),
    };

    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if args.no_color {
        config.color = false;
    }
    if args.no_sample_data {
        config.seed_sample_data = false;
    }

    config.validate()?;
    Ok(config)
}

fn setup_logging(config: &Config) -> Result<PathBuf> {
    let mut log_path = std::env::temp_dir();
    log_path.push("racetime.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // stdout belongs to the console, so logs only go to the file
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(format!("racetime_cli={0},racetime={0}", config.log_level))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(log_path)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    let log_path = setup_logging(&config)?;

    tracing::info!("RaceTime starting...");
    tracing::info!("Log file: {}", log_path.display());
    tracing::debug!("Config: {}", serde_json::to_string(&config)?);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.color);
    console.seed(config.seeds())?;
    console.run()?;

    tracing::info!(
        "Exiting with {} race entries",
        console.registry().len()
    );
    Ok(())
}
