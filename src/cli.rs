//! Command-line interface for strictly_trivia.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Trivia - a single-screen terminal trivia board
#[derive(Parser, Debug)]
#[command(name = "strictly_trivia")]
#[command(about = "Terminal trivia board backed by a public clue API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "trivia.toml")]
    pub config: PathBuf,

    /// Override the category API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the game in the terminal UI
    Play,

    /// Select one board and print it as JSON
    Board,
}
