//! Perfect Tic-Tac-Toe - play against a perfect minimax opponent
//!
//! Presentation layer on top of [`tictactoe_core`].
//!
//! # Architecture
//!
//! - **Config**: match settings from TOML plus command-line overrides
//! - **Players**: human (line input) and engine (minimax / alpha-beta)
//! - **Orchestrator**: runs a match and prints the board
//! - **Analysis**: compares both algorithms on a position
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{EnginePlayer, Orchestrator};
//! use tictactoe_core::{Algorithm, Outcome};
//!
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(EnginePlayer::new("X", Algorithm::AlphaBeta)),
//!     Box::new(EnginePlayer::new("O", Algorithm::AlphaBeta)),
//!     true,
//! );
//! let outcome = orchestrator.run(&mut std::io::sink())?;
//! assert_eq!(outcome, Outcome::Draw);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analysis;
mod config;
mod input;
mod orchestrator;
mod players;
mod render;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Input parsing
pub use input::{InputError, parse_move, parse_moves};

// Crate-level exports - Players and orchestration
pub use orchestrator::Orchestrator;
pub use players::{EnginePlayer, HumanPlayer, Player};

// Crate-level exports - Rendering and analysis
pub use analysis::{AlgorithmDecision, AnalysisReport, analyze_position, write_report};
pub use render::{SEPARATOR, describe_value, render_board, result_message};
