//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};
use hotseat_tictactoe::Position;
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (default: ./hotseat.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not install a log subscriber
    #[arg(long, global = true)]
    pub no_log: bool,

    /// Subcommand to run (default: play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves headlessly and print the result
    Replay {
        /// Cells to play, X first: indices (0-8, row-major) or labels
        /// such as "center" or "top-left"
        #[arg(required = true, value_parser = parse_cell)]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses a replay move as a cell index or a position label.
///
/// Numbers are passed through unchecked so the engine reports an
/// out-of-range index the same way it does during play.
fn parse_cell(s: &str) -> Result<usize, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("'{s}' is neither a cell index nor a cell label"))
}
