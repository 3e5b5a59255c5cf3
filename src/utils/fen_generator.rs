//! Text position generator, the inverse of `fen_parser` for placement and
//! side to move.

use crate::game_state::chess_types::{Side, Square};
use crate::game_state::game_state::GameState;

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move() {
        Side::White => "w",
        Side::Black => "b",
    };
    format!("{} {}", generate_board_field(game_state), side_to_move)
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match game_state.piece_at(Square { file, rank }) {
                Some((side, kind)) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    let letter = kind.letter();
                    out.push(match side {
                        Side::White => letter,
                        Side::Black => letter.to_ascii_lowercase(),
                    });
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

impl GameState {
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }
}
