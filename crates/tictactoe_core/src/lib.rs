//! Perfect-play tic-tac-toe.
//!
//! Immutable game states, pure rules, and two interchangeable
//! full-depth searches (minimax and alpha-beta).
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Move, alphabeta_decide, apply, minimax_decide};
//!
//! let state = apply(&GameState::new(), Move::new(0, 0))?;
//! let reply = alphabeta_decide(&state)?;
//! assert_eq!(reply, minimax_decide(&state)?);
//! assert_eq!(reply, Move::new(1, 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
pub mod search;
mod state;
mod types;

pub use error::{IllegalMoveError, NoLegalMoveError};
pub use position::{Move, Position};
pub use rules::{apply, is_terminal, legal_moves, outcome, score, winner};
pub use search::{
    AlphaBeta, Algorithm, Decision, Minimax, Search, SearchStats, alphabeta_decide, minimax_decide,
};
pub use state::GameState;
pub use types::{Board, Mark, Outcome, Square};
