//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_core::{Algorithm, Mark};

/// Perfect Tic-Tac-Toe - play against minimax or alpha-beta search
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Tic-tac-toe against a perfect-play opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match against the computer
    Play {
        /// Mark you play (x moves first)
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Search used by the computer (minimax or alphabeta)
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Hide the '*' markers on playable cells
        #[arg(long)]
        no_hints: bool,
    },

    /// Show both algorithms' choice for a position
    Analyze {
        /// Moves from the empty board, e.g. "0,0 1,1"
        #[arg(long, default_value = "")]
        moves: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides
    Selfplay {
        /// Search used for both sides
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
    },
}
