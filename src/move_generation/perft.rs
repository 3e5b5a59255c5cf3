//! Move-path enumeration for validating the generator and executor.
//!
//! Every candidate from `GameState::candidate_moves` is played on a clone
//! through `try_make_move`. Pending promotions are completed with a queen,
//! and a captured king ends the branch.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::AppliedMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub king_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.king_captures += rhs.king_captures;
    }

    fn record_leaf_move(&mut self, applied: &AppliedMove, promoted: bool) {
        self.nodes += 1;
        match applied {
            AppliedMove::Normal {
                captured,
                en_passant,
                ..
            } => {
                if captured.is_some() {
                    self.captures += 1;
                }
                if *en_passant {
                    self.en_passant += 1;
                }
                if *captured == Some(PieceKind::King) {
                    self.king_captures += 1;
                }
            }
            AppliedMove::Castle { .. } => self.castles += 1,
        }
        if promoted {
            self.promotions += 1;
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    if game_state.is_game_over() {
        return PerftCounts::default();
    }

    let mut total = PerftCounts::default();
    for mv in game_state.candidate_moves(game_state.side_to_move()) {
        let mut child = game_state.clone();
        let Ok(applied) = child.try_make_move(mv.from, mv.to) else {
            tracing::trace!(%mv, "perft candidate rejected");
            continue;
        };
        let promoted = child.pending_promotion().is_some();
        if promoted && child.promote(PieceKind::Queen).is_err() {
            continue;
        }

        if depth == 1 {
            total.record_leaf_move(&applied, promoted);
        } else {
            total.merge(perft(&child, depth - 1));
        }
    }
    total
}

/// Per-root-move node counts, in candidate order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(String, usize)> {
    let mut out = Vec::new();
    if depth == 0 || game_state.is_game_over() {
        return out;
    }
    for mv in game_state.candidate_moves(game_state.side_to_move()) {
        let mut child = game_state.clone();
        if child.try_make_move(mv.from, mv.to).is_err() {
            continue;
        }
        if child.pending_promotion().is_some() && child.promote(PieceKind::Queen).is_err() {
            continue;
        }
        out.push((mv.to_string(), perft(&child, depth - 1).nodes));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);
        let depth3 = perft(&game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.castles, 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }

    #[test]
    fn king_capture_ends_the_branch() {
        let game = GameState::from_fen("3k4/8/8/8/8/8/8/3R3K w").unwrap();
        let counts = perft(&game, 1);
        assert_eq!(counts.king_captures, 1);
        assert_eq!(counts.captures, 1);
    }

    #[test]
    fn castles_and_promotions_are_counted() {
        let game = GameState::from_fen("3k4/P7/8/8/8/8/8/R2K3R w").unwrap();
        let counts = perft(&game, 1);
        assert_eq!(counts.castles, 2);
        assert_eq!(counts.promotions, 1);
    }
}
