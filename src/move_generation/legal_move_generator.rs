//! Per-side destination generation.
//!
//! Dispatches each piece of a side to its geometry function and collects
//! one destination set per piece, in register order. Moves that would leave
//! the mover's own king attacked are not filtered out; the variant is won by
//! capturing the king.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::legal_move_shared::BoardView;
use crate::move_generation::move_generator::DestinationSet;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

#[inline]
pub fn piece_destinations(view: &BoardView<'_>, kind: PieceKind, from: Square) -> DestinationSet {
    match kind {
        PieceKind::Pawn => pawn_destinations(view, from),
        PieceKind::Knight => knight_destinations(view, from),
        PieceKind::Bishop => bishop_destinations(view, from),
        PieceKind::Rook => rook_destinations(view, from),
        PieceKind::Queen => queen_destinations(view, from),
        PieceKind::King => king_destinations(view, from),
    }
}

pub fn generate_destinations(view: &BoardView<'_>) -> Vec<DestinationSet> {
    view.own
        .iter()
        .map(|(_, kind, from)| piece_destinations(view, kind, from))
        .collect()
}
