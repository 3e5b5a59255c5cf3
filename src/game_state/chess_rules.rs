//! Rule constants for the variant: the starting arrangement, the king's
//! canonical file and the pieces a pawn may become.

use crate::game_state::chess_types::{PieceKind, Side, Square};

/// Back-rank order, file 0 through file 7. The king starts on file 3.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_FILE: u8 = 3;

pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Text form of the starting position, see `utils::fen_parser`.
pub const STARTING_POSITION_FEN: &str = "rnbkqbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBKQBNR w";

#[inline]
pub const fn king_start_square(side: Side) -> Square {
    Square {
        file: KING_START_FILE,
        rank: side.back_rank(),
    }
}

/// Corner square of the rook a castle toward `king_to` uses.
#[inline]
pub const fn castling_rook_square(side: Side, king_to: Square) -> Square {
    let file = if king_to.file < KING_START_FILE { 0 } else { 7 };
    Square {
        file,
        rank: side.back_rank(),
    }
}

/// Starting pieces for one side in identity order: back rank, then pawns.
pub fn starting_army(side: Side) -> Vec<(PieceKind, Square)> {
    let mut army = Vec::with_capacity(16);
    for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
        army.push((
            *kind,
            Square {
                file: file as u8,
                rank: side.back_rank(),
            },
        ));
    }
    for file in 0..8u8 {
        army.push((
            PieceKind::Pawn,
            Square {
                file,
                rank: side.pawn_rank(),
            },
        ));
    }
    army
}
