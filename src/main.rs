use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod commands;

use cli::{Cli, Commands, OutputFormat};
use tech_agents::config::{Config, LogLevel};

fn log_dir() -> PathBuf {
    match std::env::var("TECH_AGENTS_DIR") {
        Ok(dir) => PathBuf::from(dir).join("logs"),
        Err(_) => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tech-agents")
            .join("logs"),
    }
}

fn setup_logging(log_level: &LogLevel) -> Result<()> {
    let log_dir = log_dir();
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tech-agents.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.as_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let format = OutputFormat::resolve(cli.format);
    match cli.command {
        Commands::Cto { state, action } => {
            let path = state.unwrap_or_else(|| config.paths.cto_state());
            commands::cto::run(action, &path, format, &config)
        }
        Commands::Principal { state, action } => {
            let path = state.unwrap_or_else(|| config.paths.principal_state());
            commands::principal::run(action, &path, format, &config)
        }
        Commands::Config { action } => commands::config::run(action, format, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let log_level = if cli.verbose { LogLevel::Debug } else { config.log_level };
    setup_logging(&log_level).context("Failed to setup logging")?;

    info!("Starting tech-agents with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
