//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static scoring to `BoardScorer`.
//! Scores are always from White's point of view: positive favours White,
//! negative favours Black, whichever side is to move.

use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::game_state::GameState;
use crate::tables::piece_square_tables::square_bonus;

/// Score of a decided game.
pub const WIN_SCORE: i32 = 100_000;

pub const MOBILITY_WEIGHT: i32 = 2;
pub const CHECK_PENALTY: i32 = 50;
pub const DOUBLED_PAWN_PENALTY: i32 = 20;
pub const ISOLATED_PAWN_PENALTY: i32 = 15;
pub const PASSED_PAWN_BONUS: i32 = 30;

pub trait BoardScorer: Send + Sync {
    /// Score from White's point of view.
    fn score(&self, game_state: &GameState) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// `+WIN_SCORE` / `-WIN_SCORE` once a winner is recorded.
#[inline]
pub fn terminal_score(game_state: &GameState) -> Option<i32> {
    game_state.winner().map(|winner| match winner {
        Side::White => WIN_SCORE,
        Side::Black => -WIN_SCORE,
    })
}

#[inline]
fn material(game_state: &GameState, side: Side) -> i32 {
    game_state.pieces(side).iter().copied().map(piece_value).sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }
        material(game_state, Side::White) - material(game_state, Side::Black)
    }
}

/// Full evaluation: material, piece-square tables, mobility, king exposure
/// and pawn structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    fn placement(game_state: &GameState, side: Side) -> i32 {
        game_state
            .register(side)
            .iter()
            .map(|(_, kind, square)| square_bonus(side, kind, square))
            .sum()
    }

    fn mobility(game_state: &GameState, side: Side) -> i32 {
        game_state.legal_destinations(side).total() as i32
    }

    /// `-CHECK_PENALTY` for every opposing destination set that reaches the
    /// king.
    pub fn king_safety(game_state: &GameState, side: Side) -> i32 {
        let Some(king) = game_state.register(side).king_square() else {
            return 0;
        };
        let attackers = game_state
            .legal_destinations(side.opposite())
            .reach_count(king);
        -CHECK_PENALTY * attackers as i32
    }

    pub fn pawn_structure(game_state: &GameState, side: Side) -> i32 {
        let own: Vec<Square> = game_state.register(side).squares_of(PieceKind::Pawn).collect();
        let enemy: Vec<Square> = game_state
            .register(side.opposite())
            .squares_of(PieceKind::Pawn)
            .collect();

        let mut per_file = [0i32; 8];
        for pawn in &own {
            per_file[pawn.file as usize] += 1;
        }

        let mut score = 0;
        for count in per_file {
            if count > 1 {
                score -= DOUBLED_PAWN_PENALTY * (count - 1);
            }
        }

        for pawn in &own {
            let has_neighbour = own.iter().any(|other| other.file.abs_diff(pawn.file) == 1);
            if !has_neighbour {
                score -= ISOLATED_PAWN_PENALTY;
            }

            let blocked = enemy.iter().any(|other| {
                other.file.abs_diff(pawn.file) <= 1
                    && match side {
                        Side::White => other.rank > pawn.rank,
                        Side::Black => other.rank < pawn.rank,
                    }
            });
            if !blocked {
                score += PASSED_PAWN_BONUS;
            }
        }

        score
    }

    fn side_total(game_state: &GameState, side: Side) -> i32 {
        material(game_state, side)
            + Self::placement(game_state, side)
            + MOBILITY_WEIGHT * Self::mobility(game_state, side)
            + Self::king_safety(game_state, side)
            + Self::pawn_structure(game_state, side)
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }
        Self::side_total(game_state, Side::White) - Self::side_total(game_state, Side::Black)
    }
}
