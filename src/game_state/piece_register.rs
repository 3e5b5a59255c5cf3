//! Per-side piece register.
//!
//! A register holds three parallel sequences: piece kinds, locations and
//! "has moved" flags. The index of an entry is the piece's identity for as
//! long as it stays on the board. Entries are only ever added or removed as
//! a whole, so the three sequences always have the same length.

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceRegister {
    kinds: Vec<PieceKind>,
    locations: Vec<Square>,
    moved: Vec<bool>,
}

/// An entry removed from a register by a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedPiece {
    pub kind: PieceKind,
    pub location: Square,
    pub moved: bool,
}

impl PieceRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (PieceKind, Square, bool)>) -> Self {
        let mut register = Self::new();
        for (kind, location, moved) in entries {
            register.push(kind, location, moved);
        }
        register
    }

    pub fn push(&mut self, kind: PieceKind, location: Square, moved: bool) {
        self.kinds.push(kind);
        self.locations.push(location);
        self.moved.push(moved);
    }

    /// Removes entry `index` from all three sequences at once.
    pub fn remove(&mut self, index: usize) -> RemovedPiece {
        RemovedPiece {
            kind: self.kinds.remove(index),
            location: self.locations.remove(index),
            moved: self.moved.remove(index),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    #[inline]
    pub fn kinds(&self) -> &[PieceKind] {
        &self.kinds
    }

    #[inline]
    pub fn locations(&self) -> &[Square] {
        &self.locations
    }

    #[inline]
    pub fn moved_flags(&self) -> &[bool] {
        &self.moved
    }

    #[inline]
    pub fn kind(&self, index: usize) -> PieceKind {
        self.kinds[index]
    }

    #[inline]
    pub fn location(&self, index: usize) -> Square {
        self.locations[index]
    }

    #[inline]
    pub fn has_moved(&self, index: usize) -> bool {
        self.moved[index]
    }

    #[inline]
    pub fn index_at(&self, square: Square) -> Option<usize> {
        self.locations.iter().position(|loc| *loc == square)
    }

    #[inline]
    pub fn occupies(&self, square: Square) -> bool {
        self.locations.contains(&square)
    }

    pub fn king_index(&self) -> Option<usize> {
        self.kinds.iter().position(|kind| *kind == PieceKind::King)
    }

    pub fn king_square(&self) -> Option<Square> {
        self.king_index().map(|index| self.locations[index])
    }

    /// Relocates a piece and marks it as moved. The flag never resets.
    pub fn relocate(&mut self, index: usize, to: Square) {
        self.locations[index] = to;
        self.moved[index] = true;
    }

    /// Replaces a piece's kind in place, keeping location and moved flag.
    pub fn replace_kind(&mut self, index: usize, kind: PieceKind) {
        self.kinds[index] = kind;
    }

    /// `(index, kind, location)` for every entry, in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, PieceKind, Square)> + '_ {
        self.kinds
            .iter()
            .zip(self.locations.iter())
            .enumerate()
            .map(|(index, (kind, location))| (index, *kind, *location))
    }

    /// Locations of every entry of `kind`.
    pub fn squares_of(&self, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(move |(_, k, _)| *k == kind)
            .map(|(_, _, location)| location)
    }
}

#[cfg(test)]
mod tests {
    use super::PieceRegister;
    use crate::game_state::chess_types::{PieceKind, Square};

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn removal_keeps_sequences_aligned() {
        let mut register = PieceRegister::from_entries([
            (PieceKind::Rook, sq(0, 0), false),
            (PieceKind::King, sq(3, 0), false),
            (PieceKind::Pawn, sq(4, 1), true),
        ]);

        let removed = register.remove(1);
        assert_eq!(removed.kind, PieceKind::King);
        assert_eq!(register.len(), 2);
        assert_eq!(register.kinds().len(), register.locations().len());
        assert_eq!(register.locations().len(), register.moved_flags().len());
        assert_eq!(register.index_at(sq(4, 1)), Some(1));
        assert!(register.has_moved(1));
    }

    #[test]
    fn relocation_sets_moved_flag() {
        let mut register = PieceRegister::from_entries([(PieceKind::Knight, sq(1, 0), false)]);
        register.relocate(0, sq(2, 2));
        assert_eq!(register.location(0), sq(2, 2));
        assert!(register.has_moved(0));
    }
}
