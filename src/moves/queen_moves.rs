use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::BoardView;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Union of the bishop and rook rays.
pub fn queen_destinations(view: &BoardView<'_>, from: Square) -> Vec<Square> {
    let mut out = bishop_destinations(view, from);
    out.extend(rook_destinations(view, from));
    out
}

#[cfg(test)]
mod tests {
    use super::queen_destinations;
    use crate::game_state::chess_types::{PieceKind, Side, Square};
    use crate::game_state::piece_register::PieceRegister;
    use crate::move_generation::legal_move_shared::BoardView;

    #[test]
    fn queen_on_d4_has_twenty_seven_destinations() {
        let d4 = Square::new(3, 3).unwrap();
        let own = PieceRegister::from_entries([(PieceKind::Queen, d4, true)]);
        let enemy = PieceRegister::new();
        let view = BoardView {
            side: Side::Black,
            own: &own,
            enemy: &enemy,
            enemy_en_passant: None,
        };
        assert_eq!(queen_destinations(&view, d4).len(), 27);
    }
}
