//! King steps. Castling is not a plain destination and is offered
//! separately by `move_generation::legal_move_castling`.

use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::{step_targets, BoardView};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
];

pub fn king_destinations(view: &BoardView<'_>, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(8);
    step_targets(view, from, &KING_OFFSETS, &mut out);
    out
}
