//! Move executor.
//!
//! Validates requests against the cached destination sets and applies them
//! to a `GameState`. Validation happens before the first write, so a
//! rejected request never leaves a partially applied move behind. Every
//! accepted move ends in `finish_turn`, which recomputes both sides'
//! destination sets, looks for a pawn to promote and hands the turn over.

use crate::chess_errors::{MoveError, PromotionError};
use crate::game_state::chess_rules::{castling_rook_square, king_start_square, PROMOTION_CHOICES};
use crate::game_state::chess_types::{PieceKind, Side, Square, TurnStep};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{AppliedMove, CastleMove};

/// En-passant target a move leaves behind: the square a pawn skipped over
/// on a double push, otherwise none.
pub fn en_passant_target_after(kind: PieceKind, from: Square, to: Square) -> Option<Square> {
    if kind == PieceKind::Pawn && from.rank.abs_diff(to.rank) == 2 {
        Square::new(to.file, (from.rank + to.rank) / 2)
    } else {
        None
    }
}

impl GameState {
    /// Selects the piece on `square` for the side to move and returns its
    /// destinations.
    pub fn select_piece(&mut self, square: Square) -> Result<&[Square], MoveError> {
        self.ensure_playable()?;
        let side = self.side_to_move();
        let index = self
            .register(side)
            .index_at(square)
            .ok_or(MoveError::NotYourPiece { side, square })?;

        self.selection = Some(index);
        self.turn_step = TurnStep::destination_step(side);
        Ok(self.legal_destinations(side).for_piece(index))
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.turn_step = TurnStep::select_step(self.side_to_move());
    }

    /// Boolean form of `try_make_move`.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        match self.try_make_move(from, to) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(%from, %to, %err, "move rejected");
                false
            }
        }
    }

    /// Applies `from -> to` for the side to move, as a normal move when `to`
    /// is in the piece's destination set, or as a castle when the piece is
    /// the king and `to` is a castling destination.
    pub fn try_make_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, MoveError> {
        self.ensure_playable()?;
        let side = self.side_to_move();
        let register = self.register(side);
        let index = register
            .index_at(from)
            .ok_or(MoveError::NotYourPiece { side, square: from })?;

        let destinations = self.legal_destinations(side);
        if destinations.for_piece(index).contains(&to) {
            return Ok(self.apply_normal_move(side, index, to));
        }
        if register.kind(index) == PieceKind::King {
            if let Some(castle) = destinations.castle_to(to) {
                return self.apply_castle(side, castle);
            }
        }

        Err(MoveError::IllegalDestination { from, to })
    }

    /// Completes a pending promotion. The pawn keeps its index, square and
    /// moved flag; only its kind changes.
    pub fn promote(&mut self, kind: PieceKind) -> Result<(), PromotionError> {
        let pending = self.promotion.ok_or(PromotionError::NotPending)?;
        if !PROMOTION_CHOICES.contains(&kind) {
            return Err(PromotionError::InvalidChoice(kind));
        }

        self.registers[pending.side.index()].replace_kind(pending.index, kind);
        self.promotion = None;
        self.refresh_destinations();
        self.scan_promotion(pending.side);
        tracing::debug!(side = ?pending.side, ?kind, "pawn promoted");
        Ok(())
    }

    /// Concedes the game; the opponent of `side` wins.
    pub fn resign(&mut self, side: Side) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        self.winner = Some(side.opposite());
        self.game_over = true;
        self.selection = None;
        tracing::info!(?side, "resigned");
        Ok(())
    }

    fn ensure_playable(&self) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if let Some(pending) = self.promotion {
            return Err(MoveError::PromotionPending(pending.side));
        }
        Ok(())
    }

    fn apply_normal_move(&mut self, side: Side, index: usize, to: Square) -> AppliedMove {
        let enemy = side.opposite();
        let register = self.register(side);
        let kind = register.kind(index);
        let from = register.location(index);

        self.en_passant[side.index()] = en_passant_target_after(kind, from, to);
        self.registers[side.index()].relocate(index, to);

        let mut captured = None;
        let mut en_passant = false;
        if let Some(victim) = self.register(enemy).index_at(to) {
            captured = Some(self.capture(side, victim));
        } else if kind == PieceKind::Pawn && self.en_passant[enemy.index()] == Some(to) {
            // The skipped pawn stands beside the capturer's origin square.
            let behind = Square {
                file: to.file,
                rank: from.rank,
            };
            if let Some(victim) = self.register(enemy).index_at(behind) {
                captured = Some(self.capture(side, victim));
                en_passant = true;
            }
        }

        tracing::debug!(?side, ?kind, %from, %to, ?captured, en_passant, "move applied");
        self.finish_turn(side);

        AppliedMove::Normal {
            from,
            to,
            moved: kind,
            captured,
            en_passant,
        }
    }

    fn apply_castle(&mut self, side: Side, castle: CastleMove) -> Result<AppliedMove, MoveError> {
        let king_from = king_start_square(side);
        let rook_from = castling_rook_square(side, castle.king_to);
        let register = self.register(side);

        let king_index = register
            .index_at(king_from)
            .filter(|index| register.kind(*index) == PieceKind::King)
            .ok_or(MoveError::MissingCastlePiece {
                kind: PieceKind::King,
                square: king_from,
            })?;
        let rook_index = register
            .index_at(rook_from)
            .filter(|index| register.kind(*index) == PieceKind::Rook)
            .ok_or(MoveError::MissingCastlePiece {
                kind: PieceKind::Rook,
                square: rook_from,
            })?;

        let register = &mut self.registers[side.index()];
        register.relocate(king_index, castle.king_to);
        register.relocate(rook_index, castle.rook_to);
        self.en_passant[side.index()] = None;

        tracing::debug!(?side, king_to = %castle.king_to, rook_to = %castle.rook_to, "castled");
        self.finish_turn(side);

        Ok(AppliedMove::Castle {
            king_from,
            king_to: castle.king_to,
            rook_from,
            rook_to: castle.rook_to,
        })
    }

    /// Removes the enemy piece at `victim` and books it to `by`. Taking the
    /// king ends the game.
    fn capture(&mut self, by: Side, victim: usize) -> PieceKind {
        let removed = self.registers[by.opposite().index()].remove(victim);
        self.captured[by.index()].push(removed.kind);
        if removed.kind == PieceKind::King {
            self.winner = Some(by);
            self.game_over = true;
            tracing::info!(winner = ?by, "king captured");
        }
        removed.kind
    }

    fn finish_turn(&mut self, mover: Side) {
        self.refresh_destinations();
        if !self.game_over {
            self.scan_promotion(mover);
        }
        self.selection = None;
        self.turn_step = TurnStep::select_step(mover.opposite());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::chess_errors::{MoveError, PromotionError};
    use crate::game_state::chess_types::{PieceKind, Side, Square, TurnStep};
    use crate::game_state::game_state::{GameState, PendingPromotion};
    use crate::moves::move_descriptions::AppliedMove;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    fn play(game: &mut GameState, moves: &[((u8, u8), (u8, u8))]) {
        for ((ff, fr), (tf, tr)) in moves {
            game.try_make_move(sq(*ff, *fr), sq(*tf, *tr))
                .unwrap_or_else(|err| panic!("move {ff},{fr} -> {tf},{tr} failed: {err}"));
        }
    }

    #[test]
    fn normal_move_flips_turn_and_sets_moved_flag() {
        let mut game = GameState::new_game();
        let applied = game.try_make_move(sq(6, 0), sq(5, 2)).expect("knight move");
        assert!(matches!(applied, AppliedMove::Normal { captured: None, .. }));
        assert_eq!(game.turn_step(), TurnStep::BlackSelect);
        let index = game.register(Side::White).index_at(sq(5, 2)).unwrap();
        assert!(game.register(Side::White).has_moved(index));
    }

    #[test]
    fn rejected_requests_leave_state_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();

        assert_eq!(
            game.try_make_move(sq(4, 3), sq(4, 4)),
            Err(MoveError::NotYourPiece {
                side: Side::White,
                square: sq(4, 3)
            })
        );
        assert!(matches!(
            game.try_make_move(sq(4, 6), sq(4, 5)),
            Err(MoveError::NotYourPiece { .. })
        ));
        assert_eq!(
            game.try_make_move(sq(4, 1), sq(4, 4)),
            Err(MoveError::IllegalDestination {
                from: sq(4, 1),
                to: sq(4, 4)
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn double_push_records_en_passant_target() {
        let mut game = GameState::new_game();
        play(&mut game, &[((4, 1), (4, 3))]);
        assert_eq!(game.en_passant_target(Side::White), Some(sq(4, 2)));
        play(&mut game, &[((0, 6), (0, 5))]);
        assert_eq!(game.en_passant_target(Side::Black), None);
    }

    #[test]
    fn en_passant_capture_is_available_for_one_reply_only() {
        let mut game = GameState::new_game();
        play(
            &mut game,
            &[((4, 1), (4, 3)), ((0, 6), (0, 5)), ((4, 3), (4, 4)), ((3, 6), (3, 4))],
        );

        let mut immediate = game.clone();
        let applied = immediate.try_make_move(sq(4, 4), sq(3, 5)).expect("en passant");
        assert_eq!(
            applied,
            AppliedMove::Normal {
                from: sq(4, 4),
                to: sq(3, 5),
                moved: PieceKind::Pawn,
                captured: Some(PieceKind::Pawn),
                en_passant: true,
            }
        );
        assert_eq!(immediate.piece_at(sq(3, 4)), None);
        assert_eq!(immediate.captured_by(Side::White), &[PieceKind::Pawn]);
        assert_eq!(immediate.pieces(Side::Black).len(), 15);

        play(&mut game, &[((7, 1), (7, 2)), ((0, 5), (0, 4))]);
        assert!(!game.make_move(sq(4, 4), sq(3, 5)));
        assert_eq!(game.piece_at(sq(3, 4)), Some((Side::Black, PieceKind::Pawn)));
    }

    #[test]
    fn castling_relocates_king_and_rook() {
        let mut game = GameState::from_fen("3k4/8/8/8/8/8/8/R2K3R w").expect("position");
        let castles = &game.legal_destinations(Side::White).castling;
        assert_eq!(castles.len(), 2);

        let applied = game.try_make_move(sq(3, 0), sq(1, 0)).expect("castle");
        assert!(matches!(applied, AppliedMove::Castle { .. }));
        assert_eq!(game.piece_at(sq(1, 0)), Some((Side::White, PieceKind::King)));
        assert_eq!(game.piece_at(sq(2, 0)), Some((Side::White, PieceKind::Rook)));
        assert_eq!(game.piece_at(sq(0, 0)), None);

        let white = game.register(Side::White);
        for square in [sq(1, 0), sq(2, 0)] {
            assert!(white.has_moved(white.index_at(square).unwrap()));
        }
        assert_eq!(game.side_to_move(), Side::Black);
    }

    #[test]
    fn rook_that_moved_stays_ineligible_after_returning() {
        let mut game = GameState::from_fen("3k4/8/8/8/8/8/8/R2K3R w").expect("position");
        play(
            &mut game,
            &[((7, 0), (7, 1)), ((3, 7), (3, 6)), ((7, 1), (7, 0)), ((3, 6), (3, 7))],
        );

        let castles = &game.legal_destinations(Side::White).castling;
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].king_to, sq(1, 0));
        assert!(!game.make_move(sq(3, 0), sq(5, 0)));
    }

    #[test]
    fn promotion_blocks_moves_until_resolved() {
        let mut game = GameState::from_fen("7k/P7/8/8/8/8/8/K7 w").expect("position");
        play(&mut game, &[((0, 6), (0, 7))]);

        let pending = game.pending_promotion().expect("promotion pending");
        assert_eq!(pending.side, Side::White);
        assert_eq!(game.register(Side::White).location(pending.index), sq(0, 7));
        assert_eq!(
            game.try_make_move(sq(7, 7), sq(6, 7)),
            Err(MoveError::PromotionPending(Side::White))
        );
        assert!(game.select_piece(sq(7, 7)).is_err());

        assert_eq!(game.promote(PieceKind::King), Err(PromotionError::InvalidChoice(PieceKind::King)));
        game.promote(PieceKind::Queen).expect("promotion");
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.piece_at(sq(0, 7)), Some((Side::White, PieceKind::Queen)));

        let destinations = game.destinations_from(sq(0, 7)).unwrap();
        assert_eq!(destinations.len(), 20);
        assert!(destinations.contains(&sq(7, 0)));
        assert!(destinations.contains(&sq(7, 7)));
        assert!(!destinations.contains(&sq(0, 0)));

        assert!(game.make_move(sq(7, 7), sq(6, 7)));
        assert_eq!(game.promote(PieceKind::Rook), Err(PromotionError::NotPending));
    }

    #[test]
    fn promotion_keeps_index_and_moved_flag() {
        let mut game = GameState::from_fen("7k/P7/8/8/8/8/8/K7 w").expect("position");
        play(&mut game, &[((0, 6), (0, 7))]);
        let PendingPromotion { index, .. } = game.pending_promotion().unwrap();
        game.promote(PieceKind::Knight).unwrap();
        let white = game.register(Side::White);
        assert_eq!(white.kind(index), PieceKind::Knight);
        assert_eq!(white.location(index), sq(0, 7));
        assert!(white.has_moved(index));
    }

    #[test]
    fn capturing_the_king_ends_the_game() {
        let mut game = GameState::from_fen("3k4/8/8/8/8/8/8/3R3K w").expect("position");
        play(&mut game, &[((3, 0), (3, 7))]);

        assert_eq!(game.winner(), Some(Side::White));
        assert!(game.is_game_over());
        assert_eq!(game.captured_by(Side::White), &[PieceKind::King]);
        assert_eq!(game.try_make_move(sq(7, 0), sq(7, 1)), Err(MoveError::GameOver));
        assert_eq!(game.resign(Side::Black), Err(MoveError::GameOver));
    }

    #[test]
    fn selection_advances_and_clears_turn_step() {
        let mut game = GameState::new_game();
        let destinations = game.select_piece(sq(1, 0)).expect("knight").to_vec();
        assert_eq!(destinations, vec![sq(2, 2), sq(0, 2)]);
        assert_eq!(game.turn_step(), TurnStep::WhiteDestination);
        assert_eq!(game.selection(), Some(1));

        game.clear_selection();
        assert_eq!(game.turn_step(), TurnStep::WhiteSelect);

        game.select_piece(sq(1, 0)).unwrap();
        assert!(game.make_move(sq(1, 0), sq(2, 2)));
        assert_eq!(game.selection(), None);
        assert_eq!(game.turn_step(), TurnStep::BlackSelect);
    }

    #[test]
    fn resignation_hands_the_win_over() {
        let mut game = GameState::new_game();
        game.resign(Side::White).unwrap();
        assert_eq!(game.winner(), Some(Side::Black));
        assert!(!game.make_move(sq(4, 1), sq(4, 3)));
    }

    #[test]
    fn random_playouts_keep_registers_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..8 {
            let mut game = GameState::new_game();
            for _ in 0..120 {
                if game.is_game_over() {
                    break;
                }
                if game.pending_promotion().is_some() {
                    game.promote(PieceKind::Queen).unwrap();
                }
                let side = game.side_to_move();
                let moves = game.candidate_moves(side);
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                assert!(game.make_move(mv.from, mv.to), "candidate {mv} rejected");

                let mut seen = HashSet::new();
                for side in [Side::White, Side::Black] {
                    let register = game.register(side);
                    assert_eq!(register.kinds().len(), register.locations().len());
                    assert_eq!(register.locations().len(), register.moved_flags().len());
                    assert_eq!(game.legal_destinations(side).per_piece.len(), register.len());
                    for location in register.locations() {
                        assert!(seen.insert(*location), "two pieces on {location}");
                    }
                }
            }
        }
    }
}
