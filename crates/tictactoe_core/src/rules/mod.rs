//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`GameState`]: move generation, transition,
//! terminal test and scoring. Nothing here mutates a state.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{apply, legal_moves};
pub use win::{LINES, check_winner};

use super::{GameState, Mark, Outcome};
use tracing::instrument;

/// True iff some line is complete or the board is full.
#[instrument(level = "trace", skip(state))]
pub fn is_terminal(state: &GameState) -> bool {
    check_winner(state.board()).is_some() || is_full(state.board())
}

/// +1 if X has a line, -1 if O has a line, 0 otherwise.
///
/// 0 covers both a draw and a game still in progress. Call
/// [`is_terminal`] first, or use [`outcome`], to distinguish them.
#[instrument(level = "trace", skip(state))]
pub fn score(state: &GameState) -> i8 {
    win::score_board(state.board())
}

/// The mark owning a completed line, if any.
#[instrument(level = "trace", skip(state))]
pub fn winner(state: &GameState) -> Option<Mark> {
    check_winner(state.board())
}

/// Classifies `state` as won, drawn or still open.
#[instrument(level = "trace", skip(state))]
pub fn outcome(state: &GameState) -> Outcome {
    match check_winner(state.board()) {
        Some(mark) => Outcome::Won(mark),
        None if is_draw(state.board()) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
