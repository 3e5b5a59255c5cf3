//! Castling eligibility.
//!
//! A castle is offered for each unmoved rook on the king's rank when the
//! king itself has never moved, the side is not in check, and every square
//! strictly between king and rook is empty and absent from the opponent's
//! current destination sets. The king travels two squares toward the rook
//! and the rook lands on the square the king crossed.

use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::piece_register::PieceRegister;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::move_generator::SideDestinations;
use crate::moves::move_descriptions::CastleMove;

pub fn generate_castling_moves(
    side: Side,
    own: &PieceRegister,
    enemy: &PieceRegister,
    enemy_destinations: &SideDestinations,
) -> Vec<CastleMove> {
    let mut out = Vec::new();

    let Some(king_index) = own.king_index() else {
        return out;
    };
    if own.has_moved(king_index) {
        return out;
    }
    let king = own.location(king_index);

    let rooks: Vec<(Square, bool)> = own
        .iter()
        .filter(|(_, kind, _)| *kind == PieceKind::Rook)
        .map(|(index, _, location)| (location, own.has_moved(index)))
        .collect();
    if rooks.iter().all(|(_, moved)| *moved) {
        return out;
    }
    if is_king_in_check(own, enemy_destinations) {
        return out;
    }

    for (rook, moved) in rooks {
        if moved || rook.rank != king.rank || rook.file == king.file {
            continue;
        }
        let direction: i8 = if rook.file > king.file { 1 } else { -1 };
        let between = squares_between(king, rook, direction);
        if between.len() < 2 {
            continue;
        }

        let clear = between.iter().all(|square| {
            !own.occupies(*square)
                && !enemy.occupies(*square)
                && !is_square_attacked(*square, enemy_destinations)
        });
        if !clear {
            continue;
        }

        if let (Some(king_to), Some(rook_to)) =
            (king.offset(2 * direction, 0), king.offset(direction, 0))
        {
            tracing::trace!(?side, %king_to, %rook_to, "castle available");
            out.push(CastleMove { king_to, rook_to });
        }
    }

    out
}

fn squares_between(king: Square, rook: Square, direction: i8) -> Vec<Square> {
    let mut squares = Vec::new();
    let mut cursor = king;
    while let Some(next) = cursor.offset(direction, 0) {
        if next == rook {
            break;
        }
        squares.push(next);
        cursor = next;
    }
    squares
}
