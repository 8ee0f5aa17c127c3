//! Game orchestration between players.

use crate::players::Player;
use crate::render::render_board;
use anyhow::Result;
use std::io::Write;
use tictactoe_core::{GameState, Mark, Outcome, apply, is_terminal, outcome};
use tracing::{debug, info, instrument};

/// Runs a match between two players, printing the board after each move.
pub struct Orchestrator {
    state: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    hints: bool,
}

impl Orchestrator {
    /// Creates a new orchestrator starting from the empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, hints: bool) -> Self {
        Self {
            state: GameState::new(),
            player_x,
            player_o,
            hints,
        }
    }

    /// Plays until the game ends and returns the outcome.
    ///
    /// Each player's move is validated through `apply`; an illegal move
    /// from a player aborts the match with that error.
    #[instrument(skip_all)]
    pub fn run(&mut self, out: &mut impl Write) -> Result<Outcome> {
        info!("Starting game orchestration");
        writeln!(out, "{}\n", render_board(&self.state, self.hints))?;

        while !is_terminal(&self.state) {
            let mark = self.state.current_player();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let mv = player.choose_move(&self.state)?;
            self.state = apply(&self.state, mv)?;

            writeln!(out, "{} ({}) plays {}", player.name(), mark, mv)?;
            writeln!(out, "{}\n", render_board(&self.state, self.hints))?;
        }

        let outcome = outcome(&self.state);
        info!(%outcome, "Game over");
        Ok(outcome)
    }
}
