//! Pawn destinations: pushes, diagonal captures and en passant.

use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::BoardView;

pub fn pawn_destinations(view: &BoardView<'_>, from: Square) -> Vec<Square> {
    let side = view.side;
    let forward = side.forward();
    let mut out = Vec::with_capacity(4);

    if let Some(one_step) = from.offset(0, forward) {
        if view.is_empty(one_step) {
            out.push(one_step);
            if from.rank == side.pawn_rank() {
                if let Some(two_step) = from.offset(0, 2 * forward) {
                    if view.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_file in [1i8, -1] {
        if let Some(target) = from.offset(d_file, forward) {
            if view.is_enemy(target) {
                out.push(target);
            }
        }
    }

    if let Some(ep_square) = view.enemy_en_passant {
        for d_file in [1i8, -1] {
            if from.offset(d_file, forward) == Some(ep_square) && !out.contains(&ep_square) {
                out.push(ep_square);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::pawn_destinations;
    use crate::game_state::chess_types::{PieceKind, Side, Square};
    use crate::game_state::piece_register::PieceRegister;
    use crate::move_generation::legal_move_shared::BoardView;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn pawn_on_start_rank_may_advance_two() {
        let own = PieceRegister::from_entries([(PieceKind::Pawn, sq(4, 1), false)]);
        let enemy = PieceRegister::new();
        let view = BoardView {
            side: Side::White,
            own: &own,
            enemy: &enemy,
            enemy_en_passant: None,
        };
        assert_eq!(pawn_destinations(&view, sq(4, 1)), vec![sq(4, 2), sq(4, 3)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let own = PieceRegister::from_entries([(PieceKind::Pawn, sq(4, 6), false)]);
        let enemy = PieceRegister::from_entries([(PieceKind::Knight, sq(4, 5), true)]);
        let view = BoardView {
            side: Side::Black,
            own: &own,
            enemy: &enemy,
            enemy_en_passant: None,
        };
        assert!(pawn_destinations(&view, sq(4, 6)).is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_and_en_passant() {
        let own = PieceRegister::from_entries([(PieceKind::Pawn, sq(4, 4), true)]);
        let enemy = PieceRegister::from_entries([
            (PieceKind::Pawn, sq(3, 4), true),
            (PieceKind::Rook, sq(5, 5), true),
            (PieceKind::Pawn, sq(4, 5), true),
        ]);
        let view = BoardView {
            side: Side::White,
            own: &own,
            enemy: &enemy,
            enemy_en_passant: Some(sq(3, 5)),
        };
        assert_eq!(pawn_destinations(&view, sq(4, 4)), vec![sq(5, 5), sq(3, 5)]);
    }
}
