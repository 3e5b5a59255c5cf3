//! Primitive value types shared by every subsystem: sides, piece kinds,
//! squares and the four-step turn cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two competing parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank step a pawn of this side takes when advancing.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Rank on which a pawn of this side promotes.
    #[inline]
    pub const fn far_rank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

/// Piece kind; the owning side is tracked by which register holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case letter used by the text position format.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A board square. Rank 0 is White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    /// Builds a square, returning `None` when either coordinate is off-board.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Square displaced by `(d_file, d_rank)`, if it stays on the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

/// Position in the select/destination cycle of a full move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStep {
    WhiteSelect,
    WhiteDestination,
    BlackSelect,
    BlackDestination,
}

impl TurnStep {
    #[inline]
    pub const fn side(self) -> Side {
        match self {
            TurnStep::WhiteSelect | TurnStep::WhiteDestination => Side::White,
            TurnStep::BlackSelect | TurnStep::BlackDestination => Side::Black,
        }
    }

    #[inline]
    pub const fn select_step(side: Side) -> Self {
        match side {
            Side::White => TurnStep::WhiteSelect,
            Side::Black => TurnStep::BlackSelect,
        }
    }

    #[inline]
    pub const fn destination_step(side: Side) -> Self {
        match side {
            Side::White => TurnStep::WhiteDestination,
            Side::Black => TurnStep::BlackDestination,
        }
    }

    pub const fn as_u8(self) -> u8 {
        match self {
            TurnStep::WhiteSelect => 0,
            TurnStep::WhiteDestination => 1,
            TurnStep::BlackSelect => 2,
            TurnStep::BlackDestination => 3,
        }
    }

    pub const fn from_u8(step: u8) -> Option<Self> {
        match step {
            0 => Some(TurnStep::WhiteSelect),
            1 => Some(TurnStep::WhiteDestination),
            2 => Some(TurnStep::BlackSelect),
            3 => Some(TurnStep::BlackDestination),
            _ => None,
        }
    }
}
