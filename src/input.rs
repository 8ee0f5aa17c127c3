//! Parsing of human move input (`row,col`).

use derive_more::Display;
use tictactoe_core::Move;
use tracing::instrument;

/// Input that is not a `row,col` pair.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input, expected row,col")]
    Empty,

    /// Not exactly two comma-separated parts.
    #[display("Expected row,col but got {:?}", _0)]
    Format(String),

    /// A part is not a non-negative integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),
}

impl std::error::Error for InputError {}

/// Parses `"row,col"` (spaces around either number are ignored).
///
/// Range is not checked here; `apply` rejects cells off the board.
#[instrument]
pub fn parse_move(input: &str) -> Result<Move, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::Format(trimmed.to_string()));
    };

    let number = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| InputError::NotANumber(s.to_string()))
    };
    Ok(Move::new(number(*row)?, number(*col)?))
}

/// Parses a whitespace-separated list of moves, e.g. `"0,0 1,1 2,2"`.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Move>, InputError> {
    input.split_whitespace().map(parse_move).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_move("1,2"), Ok(Move::new(1, 2)));
    }

    #[test]
    fn test_parse_with_spaces() {
        assert_eq!(parse_move("  2 , 0 \n"), Ok(Move::new(2, 0)));
    }

    #[test]
    fn test_parse_out_of_range_is_still_a_move() {
        assert_eq!(parse_move("5,1"), Ok(Move::new(5, 1)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_move(""), Err(InputError::Empty));
        assert_eq!(parse_move("   "), Err(InputError::Empty));
        assert_eq!(parse_move("1"), Err(InputError::Format("1".to_string())));
        assert_eq!(
            parse_move("1,2,3"),
            Err(InputError::Format("1,2,3".to_string()))
        );
        assert_eq!(
            parse_move("a,1"),
            Err(InputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_move("-1,1"),
            Err(InputError::NotANumber("-1".to_string()))
        );
    }

    #[test]
    fn test_parse_moves_list() {
        assert_eq!(
            parse_moves("0,0 1,1\t2,2"),
            Ok(vec![Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)])
        );
        assert_eq!(parse_moves(""), Ok(vec![]));
        assert!(parse_moves("0,0 x").is_err());
    }
}
