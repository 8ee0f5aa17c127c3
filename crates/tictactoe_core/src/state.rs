//! Immutable game state.

use super::error::IllegalMoveError;
use super::position::Move;
use super::rules;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A board configuration plus the mark to move.
///
/// `GameState` is a `Copy` value with no mutating methods. Transitions
/// go through [`rules::apply`], which returns a fresh state, so the
/// alternation invariant (X count minus O count is 0 or 1) holds for
/// every state reachable from [`GameState::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
}

impl GameState {
    /// Creates the empty starting state with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
        }
    }

    /// Builds a state from an explicit board and player.
    pub(crate) fn from_parts(board: Board, current_player: Mark) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Replays `moves` from the empty state.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMoveError`] encountered.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn from_moves(moves: &[Move]) -> Result<Self, IllegalMoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |state, mv| rules::apply(&state, *mv))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
