//! Command-line interface for rewind_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - play, rewind to any move, and branch from there
#[derive(Parser, Debug, Default)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the settings file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the settings file)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Leave empty squares blank instead of showing their key number
    #[arg(long)]
    pub no_hints: bool,
}
