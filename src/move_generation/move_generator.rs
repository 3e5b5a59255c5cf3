//! Output types of move generation.

use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::CastleMove;

/// Squares one piece may move to this turn.
pub type DestinationSet = Vec<Square>;

/// Destination sets for every piece of one side, index-aligned with the
/// side's piece register, plus the castles currently open to its king.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideDestinations {
    pub per_piece: Vec<DestinationSet>,
    pub castling: Vec<CastleMove>,
}

impl SideDestinations {
    #[inline]
    pub fn for_piece(&self, index: usize) -> &[Square] {
        self.per_piece
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when any piece of this side can reach `square`.
    pub fn reaches(&self, square: Square) -> bool {
        self.per_piece.iter().any(|set| set.contains(&square))
    }

    /// Number of destination sets containing `square`.
    pub fn reach_count(&self, square: Square) -> usize {
        self.per_piece
            .iter()
            .filter(|set| set.contains(&square))
            .count()
    }

    /// Sum of all destination set sizes, the side's mobility.
    pub fn total(&self) -> usize {
        self.per_piece.iter().map(Vec::len).sum()
    }

    pub fn castle_to(&self, king_to: Square) -> Option<CastleMove> {
        self.castling
            .iter()
            .copied()
            .find(|castle| castle.king_to == king_to)
    }
}
