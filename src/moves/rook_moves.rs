//! Rook destinations: four orthogonal rays.

use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::{trace_ray, BoardView};

/// Toward rank 8, toward rank 1, toward file h, toward file a.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn rook_destinations(view: &BoardView<'_>, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for (d_file, d_rank) in ROOK_DIRECTIONS {
        trace_ray(view, from, d_file, d_rank, &mut out);
    }
    out
}
