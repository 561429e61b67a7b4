//! Strictly Trivia - terminal frontend
//!
//! Loads configuration, initializes tracing and runs the selected command.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_trivia::{CategoryProvider, GameConfig, HttpCategorySource, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            initialize_file_tracing(&config)?;
            run_tui(&config).await
        }
        Command::Board => {
            initialize_stderr_tracing();
            print_board(&config).await
        }
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)?.apply_env();
    if let Some(url) = &cli.api_url {
        config = config.with_api_base_url(url.clone());
    }
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path.clone());
    }
    Ok(config)
}

/// Logs to a file so the TUI keeps the terminal.
fn initialize_file_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_trivia=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[instrument(skip(config), fields(api_base_url = %config.api_base_url()))]
async fn print_board(config: &GameConfig) -> Result<()> {
    let source = HttpCategorySource::new(config.api_base_url());
    let provider = CategoryProvider::new(source, config.board_shape(), *config.listing_count());
    let board = provider.select_categories().await?;
    info!(categories = board.categories().len(), "Board selected");
    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}
