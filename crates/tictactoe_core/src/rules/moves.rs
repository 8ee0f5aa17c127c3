//! Move generation and state transition.

use super::super::{GameState, IllegalMoveError, Move, Position, Square};
use tracing::instrument;

/// All empty cells of `state`, in row-major order.
///
/// The order is fixed so search tie-breaks are reproducible.
#[instrument(level = "trace", skip(state))]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    empty_positions(state).map(Move::from).collect()
}

/// Empty cells in row-major order.
pub(crate) fn empty_positions(state: &GameState) -> impl Iterator<Item = Position> + '_ {
    Position::ALL
        .into_iter()
        .filter(|pos| state.board().is_empty(*pos))
}

/// Every legal move paired with the state it leads to, in row-major order.
pub(crate) fn successors(state: &GameState) -> impl Iterator<Item = (Move, GameState)> + '_ {
    empty_positions(state).map(|pos| (Move::from(pos), place(state, pos)))
}

/// Marks an empty `pos` for the side to move. Callers guarantee `pos` is empty.
fn place(state: &GameState, pos: Position) -> GameState {
    let player = state.current_player();
    let board = state.board().with(pos, Square::Occupied(player));
    GameState::from_parts(board, player.opponent())
}

/// Places the current player's mark at `mv` and passes the turn.
///
/// The input state is left untouched; a new state is returned.
///
/// # Errors
///
/// - [`IllegalMoveError::OutOfBounds`] if either coordinate is not in `0..3`.
/// - [`IllegalMoveError::Occupied`] if the target square is taken.
#[instrument(level = "trace", skip(state), fields(player = ?state.current_player()))]
pub fn apply(state: &GameState, mv: Move) -> Result<GameState, IllegalMoveError> {
    let pos = mv.position().ok_or(IllegalMoveError::OutOfBounds {
        row: mv.row,
        col: mv.col,
    })?;

    if !state.board().is_empty(pos) {
        return Err(IllegalMoveError::Occupied(pos));
    }

    Ok(place(state, pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_board_has_nine_moves_row_major() {
        let moves = legal_moves(&GameState::new());
        assert_eq!(moves.len(), 9);
        assert_eq!(moves.first(), Some(&Move::new(0, 0)));
        assert_eq!(moves.get(1), Some(&Move::new(0, 1)));
        assert_eq!(moves.last(), Some(&Move::new(2, 2)));
    }

    #[test]
    fn test_apply_places_mark_and_flips_player() {
        let start = GameState::new();
        let next = apply(&start, Move::new(1, 1)).unwrap();
        assert_eq!(next.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(next.current_player(), Mark::O);
        // Input state is untouched
        assert!(start.board().is_empty(Position::Center));
        assert_eq!(start.current_player(), Mark::X);
    }

    #[test]
    fn test_successors_match_apply() {
        let state = GameState::from_moves(&[Move::new(0, 0), Move::new(1, 1)]).unwrap();
        let children: Vec<(Move, GameState)> = successors(&state).collect();
        let moves: Vec<Move> = children.iter().map(|(mv, _)| *mv).collect();
        assert_eq!(moves, legal_moves(&state));
        for (mv, next) in children {
            assert_eq!(Ok(next), apply(&state, mv));
        }
    }

    #[test]
    fn test_successors_of_full_board_is_empty() {
        // X O X / X O O / O X X
        let moves: Vec<Move> = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)]
            .into_iter()
            .map(|(r, c)| Move::new(r, c))
            .collect();
        let state = GameState::from_moves(&moves).unwrap();
        assert_eq!(successors(&state).count(), 0);
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let err = apply(&GameState::new(), Move::new(3, 0)).unwrap_err();
        assert_eq!(err, IllegalMoveError::OutOfBounds { row: 3, col: 0 });
        let err = apply(&GameState::new(), Move::new(0, 5)).unwrap_err();
        assert_eq!(err, IllegalMoveError::OutOfBounds { row: 0, col: 5 });
    }

    #[test]
    fn test_apply_occupied() {
        let state = apply(&GameState::new(), Move::new(2, 1)).unwrap();
        let err = apply(&state, Move::new(2, 1)).unwrap_err();
        assert_eq!(err, IllegalMoveError::Occupied(Position::BottomCenter));
        assert!(err.to_string().contains("occupied"));
    }
}
