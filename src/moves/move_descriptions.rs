//! Move value types exchanged between the generator, the executor and the
//! search.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

/// A plain `(from, to)` request, the unit the search enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// A castle offered to the king: where the king lands and where its rook
/// lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleMove {
    pub king_to: Square,
    pub rook_to: Square,
}

/// What `try_make_move` actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedMove {
    Normal {
        from: Square,
        to: Square,
        moved: PieceKind,
        captured: Option<PieceKind>,
        en_passant: bool,
    },
    Castle {
        king_from: Square,
        king_to: Square,
        rook_from: Square,
        rook_to: Square,
    },
}

impl AppliedMove {
    pub fn captured(&self) -> Option<PieceKind> {
        match self {
            AppliedMove::Normal { captured, .. } => *captured,
            AppliedMove::Castle { .. } => None,
        }
    }
}
