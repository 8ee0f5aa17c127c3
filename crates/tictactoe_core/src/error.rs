//! Error types for rules and search.

use super::position::Position;
use super::types::Outcome;
use derive_more::{Display, Error};

/// A move that cannot be applied to the given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMoveError {
    /// Coordinates outside `[0, 3)`.
    #[display("Move ({},{}) is off the board (rows and columns are 0-2)", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for IllegalMoveError {}

/// A search was asked to move in a state where the game is already over.
#[derive(Debug, Clone, Display, Error)]
#[display("No legal move: game is already over ({}) at {}:{}", outcome, file, line)]
pub struct NoLegalMoveError {
    /// Outcome of the terminal state.
    pub outcome: Outcome,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl NoLegalMoveError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(outcome: Outcome) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            outcome,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
