//! Board view and sliding/stepping helpers shared by the per-piece
//! destination functions.

use crate::game_state::chess_types::{Side, Square};
use crate::game_state::piece_register::PieceRegister;

/// Read-only view of the board from one side's perspective, the input to
/// every per-piece destination function.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub side: Side,
    pub own: &'a PieceRegister,
    pub enemy: &'a PieceRegister,
    /// Square the opponent's last double pawn push passed over, if any.
    pub enemy_en_passant: Option<Square>,
}

impl<'a> BoardView<'a> {
    #[inline]
    pub fn is_friendly(&self, square: Square) -> bool {
        self.own.occupies(square)
    }

    #[inline]
    pub fn is_enemy(&self, square: Square) -> bool {
        self.enemy.occupies(square)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        !self.is_friendly(square) && !self.is_enemy(square)
    }
}

/// Walks from `from` in steps of `(d_file, d_rank)`. The ray stops before a
/// friendly piece and on (including) an enemy piece.
pub fn trace_ray(view: &BoardView<'_>, from: Square, d_file: i8, d_rank: i8, out: &mut Vec<Square>) {
    let mut cursor = from;
    while let Some(target) = cursor.offset(d_file, d_rank) {
        if view.is_friendly(target) {
            break;
        }
        out.push(target);
        if view.is_enemy(target) {
            break;
        }
        cursor = target;
    }
}

/// Adds `from + offset` for every offset that stays on the board and does
/// not land on a friendly piece.
pub fn step_targets(view: &BoardView<'_>, from: Square, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for (d_file, d_rank) in offsets {
        if let Some(target) = from.offset(*d_file, *d_rank) {
            if !view.is_friendly(target) {
                out.push(target);
            }
        }
    }
}
