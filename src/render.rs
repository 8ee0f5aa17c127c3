//! Text rendering of the board.

use tictactoe_core::{GameState, Mark, Outcome, Position, Square, legal_moves};
use tracing::instrument;

/// Row separator between board lines.
pub const SEPARATOR: &str = "---+---+---";

/// Renders `state` as three lines of cells joined by ` | `.
///
/// Occupied cells show their mark. Empty cells show `*` when `hints`
/// is on and the cell is a legal move, otherwise a blank.
#[instrument(skip(state))]
pub fn render_board(state: &GameState, hints: bool) -> String {
    let legal = legal_moves(state);
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| match state.board().get(pos) {
                    Square::Occupied(mark) => mark.to_string(),
                    Square::Empty if hints && legal.contains(&pos.into()) => "*".to_string(),
                    Square::Empty => " ".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();
    rows.join(&format!("\n{}\n", SEPARATOR))
}

/// Describes a search value (+1, -1, 0) in words.
pub fn describe_value(value: i8) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

/// End-of-game message from the point of view of `human`.
pub fn result_message(outcome: Outcome, human: Mark) -> String {
    match outcome {
        Outcome::Won(mark) if mark == human => "You win!".to_string(),
        Outcome::Won(mark) => format!("The computer ({}) wins.", mark),
        Outcome::Draw => "Draw!".to_string(),
        Outcome::InProgress => "The game is not over.".to_string(),
    }
}
