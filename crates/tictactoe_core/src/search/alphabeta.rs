//! Alpha-beta pruned minimax.
//!
//! `alpha` is the value MAX can already guarantee on the current path
//! and `beta` the value MIN can. A node stops expanding once its value
//! crosses the opposing bound. Pruned nodes return a bound rather than
//! an exact value, which is never better than the move already held at
//! the root, so the root decision matches [`Minimax`](super::Minimax).

use super::{Decision, NEG_INF, POS_INF, Search, SearchStats};
use crate::rules::moves::successors;
use crate::rules::{is_terminal, outcome, score};
use crate::{GameState, Mark, Move, NoLegalMoveError};
use tracing::{debug, instrument, trace};

/// Alpha-beta strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl Search for AlphaBeta {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    #[instrument(skip(self, state), fields(player = ?state.current_player()))]
    fn analyze(&self, state: &GameState) -> Result<Decision, NoLegalMoveError> {
        let outcome = outcome(state);
        if outcome.is_terminal() {
            return Err(NoLegalMoveError::new(outcome));
        }

        let mut stats = SearchStats::default();
        stats.visit();

        let mut alpha = NEG_INF;
        let mut beta = POS_INF;
        let maximising = state.current_player() == Mark::X;
        let mut best_value = if maximising { NEG_INF } else { POS_INF };
        let mut best_move = None;

        for (mv, next) in successors(state) {
            if maximising {
                let value = min_value(&next, alpha, beta, &mut stats);
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_value);
            } else {
                let value = max_value(&next, alpha, beta, &mut stats);
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best_value);
            }
        }

        let best_move = best_move.ok_or_else(|| NoLegalMoveError::new(outcome))?;
        debug!(%best_move, value = best_value, nodes = stats.nodes, "Alpha-beta decision");
        Ok(Decision::new(best_move, best_value, stats))
    }
}

/// Alpha-beta choice for the side to move in `state`.
///
/// # Errors
///
/// Returns [`NoLegalMoveError`] if `state` is terminal.
pub fn alphabeta_decide(state: &GameState) -> Result<Move, NoLegalMoveError> {
    AlphaBeta.decide(state)
}

/// Pruned value of `state` with X (MAX) to move, within `(alpha, beta)`.
pub fn value_max_ab(state: &GameState, alpha: i8, beta: i8) -> i8 {
    max_value(state, alpha, beta, &mut SearchStats::default())
}

/// Pruned value of `state` with O (MIN) to move, within `(alpha, beta)`.
pub fn value_min_ab(state: &GameState, alpha: i8, beta: i8) -> i8 {
    min_value(state, alpha, beta, &mut SearchStats::default())
}

fn max_value(state: &GameState, mut alpha: i8, beta: i8, stats: &mut SearchStats) -> i8 {
    stats.visit();
    if is_terminal(state) {
        return score(state);
    }
    let mut v = NEG_INF;
    for (mv, next) in successors(state) {
        v = v.max(min_value(&next, alpha, beta, stats));
        if v >= beta {
            trace!(%mv, v, beta, "Beta cutoff");
            return v;
        }
        alpha = alpha.max(v);
    }
    v
}

fn min_value(state: &GameState, alpha: i8, mut beta: i8, stats: &mut SearchStats) -> i8 {
    stats.visit();
    if is_terminal(state) {
        return score(state);
    }
    let mut v = POS_INF;
    for (mv, next) in successors(state) {
        v = v.min(max_value(&next, alpha, beta, stats));
        if v <= alpha {
            trace!(%mv, v, alpha, "Alpha cutoff");
            return v;
        }
        beta = beta.min(v);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Minimax;
    use crate::search::minimax::value_max;

    fn play(moves: &[(usize, usize)]) -> GameState {
        let moves: Vec<Move> = moves.iter().map(|&(r, c)| Move::new(r, c)).collect();
        GameState::from_moves(&moves).unwrap()
    }

    #[test]
    fn test_full_window_is_exact() {
        let state = GameState::new();
        assert_eq!(value_max_ab(&state, NEG_INF, POS_INF), value_max(&state));
    }

    #[test]
    fn test_beta_cutoff_returns_bound() {
        // X to move can win at once; with beta already at 0 the first
        // winning child triggers a cutoff and the bound is returned.
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(value_max_ab(&state, NEG_INF, 0), 1);
    }

    #[test]
    fn test_alpha_cutoff_returns_bound() {
        // O to move can win at once; alpha at 0 prunes after the win.
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2)]);
        assert_eq!(value_min_ab(&state, 0, POS_INF), -1);
    }

    #[test]
    fn test_matches_minimax_from_empty_board() {
        let ab = AlphaBeta.analyze(&GameState::new()).unwrap();
        let mm = Minimax.analyze(&GameState::new()).unwrap();
        assert_eq!(ab.best_move(), mm.best_move());
        assert_eq!(ab.value(), mm.value());
    }

    #[test]
    fn test_prunes_nodes() {
        let ab = AlphaBeta.analyze(&GameState::new()).unwrap();
        let mm = Minimax.analyze(&GameState::new()).unwrap();
        assert!(ab.stats().nodes < mm.stats().nodes);
    }

    #[test]
    fn test_terminal_state_is_an_error() {
        // X O X / X O O / O X X
        let draw = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        let err = alphabeta_decide(&draw).unwrap_err();
        assert_eq!(err.outcome, crate::Outcome::Draw);
    }
}
