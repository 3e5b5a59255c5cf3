//! Attack queries expressed over cached destination sets.

use crate::game_state::chess_types::Square;
use crate::game_state::piece_register::PieceRegister;
use crate::move_generation::move_generator::SideDestinations;

/// A square counts as attacked when it appears in any of the attacker's
/// destination sets.
#[inline]
pub fn is_square_attacked(square: Square, attacker: &SideDestinations) -> bool {
    attacker.reaches(square)
}

/// True when `defender`'s king sits in one of `attacker`'s destination sets.
/// A side without a king is never in check.
pub fn is_king_in_check(defender: &PieceRegister, attacker: &SideDestinations) -> bool {
    defender
        .king_square()
        .is_some_and(|king| is_square_attacked(king, attacker))
}
