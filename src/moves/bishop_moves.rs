//! Bishop destinations: four diagonal rays.

use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::{trace_ray, BoardView};

/// Up-right, up-left, down-right, down-left as seen from White's camp.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];

pub fn bishop_destinations(view: &BoardView<'_>, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(13);
    for (d_file, d_rank) in BISHOP_DIRECTIONS {
        trace_ray(view, from, d_file, d_rank, &mut out);
    }
    out
}
