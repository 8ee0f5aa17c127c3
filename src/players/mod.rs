//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use tictactoe_core::{GameState, Move};

/// Anything that can pick a move for the side to move.
pub trait Player {
    /// Chooses a legal move for `state`.
    fn choose_move(&mut self, state: &GameState) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
