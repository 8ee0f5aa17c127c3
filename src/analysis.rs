//! Side-by-side analysis of a position by both search algorithms.

use crate::render::{describe_value, render_board};
use serde::Serialize;
use std::io::{self, Write};
use strum::IntoEnumIterator;
use tictactoe_core::{Algorithm, Decision, GameState, Move, NoLegalMoveError, Outcome, outcome};
use tracing::instrument;

/// One algorithm's verdict on a position.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmDecision {
    /// Algorithm that produced the decision.
    pub algorithm: Algorithm,
    /// The decision itself.
    pub decision: Decision,
}

/// Report on a position: its outcome and, if open, every algorithm's move.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Moves replayed from the empty board.
    pub moves: Vec<Move>,
    /// Position analysed.
    pub state: GameState,
    /// Outcome of the position.
    pub outcome: Outcome,
    /// Decisions, empty when the position is terminal.
    pub decisions: Vec<AlgorithmDecision>,
}

impl AnalysisReport {
    /// True when every algorithm picked the same move.
    pub fn algorithms_agree(&self) -> bool {
        self.decisions
            .windows(2)
            .all(|w| w[0].decision.best_move() == w[1].decision.best_move())
    }
}

/// Runs every [`Algorithm`] on `state`.
///
/// A terminal position yields a report with no decisions.
///
/// # Errors
///
/// Propagates [`NoLegalMoveError`] from a search.
#[instrument(skip(state))]
pub fn analyze_position(
    moves: Vec<Move>,
    state: GameState,
) -> Result<AnalysisReport, NoLegalMoveError> {
    let outcome = outcome(&state);
    let decisions = if outcome.is_terminal() {
        Vec::new()
    } else {
        Algorithm::iter()
            .map(|algorithm| {
                algorithm
                    .strategy()
                    .analyze(&state)
                    .map(|decision| AlgorithmDecision {
                        algorithm,
                        decision,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(AnalysisReport {
        moves,
        state,
        outcome,
        decisions,
    })
}

/// Writes `report` as text: the board, then one line per algorithm.
pub fn write_report(out: &mut impl Write, report: &AnalysisReport) -> io::Result<()> {
    writeln!(out, "{}\n", render_board(&report.state, true))?;
    if report.outcome.is_terminal() {
        return writeln!(out, "Game over: {}", report.outcome);
    }

    writeln!(out, "{} to move", report.state.current_player())?;
    for entry in &report.decisions {
        writeln!(
            out,
            "{:>9}: play {}  (value {:+}, {}; {} nodes)",
            entry.algorithm.to_string(),
            entry.decision.best_move(),
            entry.decision.value(),
            describe_value(*entry.decision.value()),
            entry.decision.stats().nodes,
        )?;
    }
    if !report.algorithms_agree() {
        writeln!(out, "warning: algorithms disagree")?;
    }
    Ok(())
}
