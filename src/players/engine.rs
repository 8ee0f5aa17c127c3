//! Computer player backed by a perfect-play search.

use super::Player;
use anyhow::Result;
use tictactoe_core::{Algorithm, GameState, Move};
use tracing::{debug, instrument};

/// Computer player using minimax or alpha-beta.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    name: String,
    algorithm: Algorithm,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>, algorithm: Algorithm) -> Self {
        Self {
            name: name.into(),
            algorithm,
        }
    }
}

impl Player for EnginePlayer {
    #[instrument(skip(self, state), fields(player = %self.name, algorithm = %self.algorithm))]
    fn choose_move(&mut self, state: &GameState) -> Result<Move> {
        let decision = self.algorithm.strategy().analyze(state)?;
        debug!(
            best_move = %decision.best_move(),
            value = decision.value(),
            nodes = decision.stats().nodes,
            "Engine chose move"
        );
        Ok(*decision.best_move())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
