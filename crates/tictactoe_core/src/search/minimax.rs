//! Exhaustive minimax.
//!
//! X is the maximising side and O the minimising side. Recursion
//! bottoms out at terminal states; there is no depth limit because the
//! whole tree below any state fits in at most nine plies.

use super::{Decision, NEG_INF, POS_INF, Search, SearchStats};
use crate::rules::moves::successors;
use crate::rules::{is_terminal, outcome, score};
use crate::{GameState, Mark, Move, NoLegalMoveError};
use tracing::{debug, instrument};

/// Exhaustive minimax strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Search for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    #[instrument(skip(self, state), fields(player = ?state.current_player()))]
    fn analyze(&self, state: &GameState) -> Result<Decision, NoLegalMoveError> {
        let outcome = outcome(state);
        if outcome.is_terminal() {
            return Err(NoLegalMoveError::new(outcome));
        }

        let mut stats = SearchStats::default();
        stats.visit();

        let maximising = state.current_player() == Mark::X;
        let mut best_value = if maximising { NEG_INF } else { POS_INF };
        let mut best_move = None;

        for (mv, next) in successors(state) {
            let value = if maximising {
                min_value(&next, &mut stats)
            } else {
                max_value(&next, &mut stats)
            };
            // Strict comparison keeps the first best move in enumeration order
            let improves = if maximising {
                value > best_value
            } else {
                value < best_value
            };
            if improves {
                best_value = value;
                best_move = Some(mv);
            }
        }

        let best_move = best_move.ok_or_else(|| NoLegalMoveError::new(outcome))?;
        debug!(%best_move, value = best_value, nodes = stats.nodes, "Minimax decision");
        Ok(Decision::new(best_move, best_value, stats))
    }
}

/// Minimax choice for the side to move in `state`.
///
/// # Errors
///
/// Returns [`NoLegalMoveError`] if `state` is terminal.
pub fn minimax_decide(state: &GameState) -> Result<Move, NoLegalMoveError> {
    Minimax.decide(state)
}

/// Value of `state` with X (MAX) to move.
pub fn value_max(state: &GameState) -> i8 {
    max_value(state, &mut SearchStats::default())
}

/// Value of `state` with O (MIN) to move.
pub fn value_min(state: &GameState) -> i8 {
    min_value(state, &mut SearchStats::default())
}

fn max_value(state: &GameState, stats: &mut SearchStats) -> i8 {
    stats.visit();
    if is_terminal(state) {
        return score(state);
    }
    let mut v = NEG_INF;
    for (_, next) in successors(state) {
        v = v.max(min_value(&next, stats));
    }
    v
}

fn min_value(state: &GameState, stats: &mut SearchStats) -> i8 {
    stats.visit();
    if is_terminal(state) {
        return score(state);
    }
    let mut v = POS_INF;
    for (_, next) in successors(state) {
        v = v.min(max_value(&next, stats));
    }
    v
}
