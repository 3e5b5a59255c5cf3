use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::{step_targets, BoardView};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

pub fn knight_destinations(view: &BoardView<'_>, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(8);
    step_targets(view, from, &KNIGHT_OFFSETS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::knight_destinations;
    use crate::game_state::chess_types::{PieceKind, Side, Square};
    use crate::game_state::piece_register::PieceRegister;
    use crate::move_generation::legal_move_shared::BoardView;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn knight_skips_friendly_squares_but_takes_enemies() {
        let own = PieceRegister::from_entries([
            (PieceKind::Knight, sq(1, 0), false),
            (PieceKind::Pawn, sq(3, 1), false),
        ]);
        let enemy = PieceRegister::from_entries([(PieceKind::Pawn, sq(2, 2), true)]);
        let view = BoardView {
            side: Side::White,
            own: &own,
            enemy: &enemy,
            enemy_en_passant: None,
        };

        let destinations = knight_destinations(&view, sq(1, 0));
        assert_eq!(destinations, vec![sq(2, 2), sq(0, 2)]);
    }

    #[test]
    fn knight_in_centre_has_eight_targets() {
        let own = PieceRegister::from_entries([(PieceKind::Knight, sq(3, 3), true)]);
        let enemy = PieceRegister::new();
        let view = BoardView {
            side: Side::White,
            own: &own,
            enemy: &enemy,
            enemy_en_passant: None,
        };
        assert_eq!(knight_destinations(&view, sq(3, 3)).len(), 8);
    }
}
