//! Perfect-play search over the full game tree.
//!
//! Two interchangeable strategies are provided:
//!
//! - [`Minimax`] evaluates every node below the current state.
//! - [`AlphaBeta`] prunes subtrees that cannot change the decision.
//!
//! Both walk moves in [`legal_moves`](crate::rules::legal_moves) order
//! and keep the first move reaching the best value, so they return the
//! same move for every reachable state.

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::{AlphaBeta, alphabeta_decide};
pub use minimax::{Minimax, minimax_decide};

use super::{GameState, Move, NoLegalMoveError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Stand-in for negative infinity; below every reachable score.
pub const NEG_INF: i8 = i8::MIN;

/// Stand-in for positive infinity; above every reachable score.
pub const POS_INF: i8 = i8::MAX;

/// Node counter threaded through a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States visited, root included.
    pub nodes: u64,
}

impl SearchStats {
    pub(crate) fn visit(&mut self) {
        self.nodes += 1;
    }
}

/// Result of a search: the chosen move and what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Decision {
    /// Move selected for the side to move.
    best_move: Move,
    /// Game value after the move under perfect play (+1 X wins, -1 O wins, 0 draw).
    value: i8,
    /// Search statistics.
    stats: SearchStats,
}

impl Decision {
    pub(crate) fn new(best_move: Move, value: i8, stats: SearchStats) -> Self {
        Self {
            best_move,
            value,
            stats,
        }
    }
}

/// A perfect-play move selector.
pub trait Search {
    /// Short name for logs and output.
    fn name(&self) -> &'static str;

    /// Searches `state` and reports the chosen move with its value.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMoveError`] if `state` is terminal.
    fn analyze(&self, state: &GameState) -> Result<Decision, NoLegalMoveError>;

    /// Chooses a move for the side to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMoveError`] if `state` is terminal.
    fn decide(&self, state: &GameState) -> Result<Move, NoLegalMoveError> {
        self.analyze(state).map(|d| d.best_move)
    }
}

/// Selectable search algorithm.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Algorithm {
    /// Exhaustive minimax.
    Minimax,
    /// Alpha-beta pruned minimax.
    #[default]
    AlphaBeta,
}

impl Algorithm {
    /// The strategy implementing this algorithm.
    pub fn strategy(self) -> &'static dyn Search {
        match self {
            Algorithm::Minimax => &Minimax,
            Algorithm::AlphaBeta => &AlphaBeta,
        }
    }
}
