//! Conversions between squares and coordinate text.
//!
//! File 0..7 maps to `a..h` and rank 0..7 to `1..8`, so White's back rank
//! reads as rank `1`. Used by the text position format, the match harness
//! move list and diagnostics.

use crate::chess_errors::StateError;
use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::ChessMove;

/// Parses coordinate notation such as `"e4"`.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, StateError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(StateError::InvalidPosition(format!("invalid square '{text}'")));
    }

    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) {
        return Err(StateError::InvalidPosition(format!(
            "invalid file '{}'",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(StateError::InvalidPosition(format!(
            "invalid rank '{}'",
            rank as char
        )));
    }

    Ok(Square {
        file: file - b'a',
        rank: rank - b'1',
    })
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parses a `(from, to)` request written as two joined squares, `"e2e4"`.
pub fn algebraic_to_move(text: &str) -> Result<ChessMove, StateError> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(StateError::InvalidPosition(format!("invalid move '{text}'")));
    }
    let from = algebraic_to_square(&text[..2])?;
    let to = algebraic_to_square(&text[2..])?;
    Ok(ChessMove::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_move, algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square { file: 0, rank: 0 });
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square { file: 7, rank: 7 });
        assert_eq!(square_to_algebraic(Square { file: 3, rank: 0 }), "d1");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "e", "i1", "a9", "e44"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn moves_parse_as_square_pairs() {
        let mv = algebraic_to_move("e2e4").expect("e2e4 should parse");
        assert_eq!(mv.from, Square { file: 4, rank: 1 });
        assert_eq!(mv.to, Square { file: 4, rank: 3 });
        assert_eq!(mv.to_string(), "e2e4");
        assert!(algebraic_to_move("e2-e4").is_err());
    }
}
