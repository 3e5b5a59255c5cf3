//! Core board state.
//!
//! `GameState` owns both sides' piece registers, the turn step, en-passant
//! markers, pending promotion, the outcome, and the destination sets derived
//! from all of it. Fields are crate-private: outside the crate the state is
//! only changed through the executor methods in
//! `move_generation::legal_move_apply` and the loaders in `board_record` /
//! `utils::fen_parser`, and every one of them finishes by calling
//! `refresh_destinations`, so the cached sets are never stale when read.

use crate::game_state::chess_rules::starting_army;
use crate::game_state::chess_types::{PieceKind, Side, Square, TurnStep};
use crate::game_state::piece_register::PieceRegister;
use crate::move_generation::legal_move_castling::generate_castling_moves;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_destinations;
use crate::move_generation::legal_move_shared::BoardView;
use crate::move_generation::move_generator::SideDestinations;
use crate::moves::move_descriptions::ChessMove;

/// A pawn standing on its far rank, waiting for a replacement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub side: Side,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) registers: [PieceRegister; 2],
    /// Pieces captured *by* each side, in capture order.
    pub(crate) captured: [Vec<PieceKind>; 2],
    pub(crate) turn_step: TurnStep,
    pub(crate) selection: Option<usize>,
    pub(crate) en_passant: [Option<Square>; 2],
    pub(crate) promotion: Option<PendingPromotion>,
    pub(crate) winner: Option<Side>,
    pub(crate) game_over: bool,
    pub(crate) destinations: [SideDestinations; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to select.
    pub fn new_game() -> Self {
        let army = |side: Side| {
            PieceRegister::from_entries(
                starting_army(side)
                    .into_iter()
                    .map(|(kind, square)| (kind, square, false)),
            )
        };
        Self::from_registers(army(Side::White), army(Side::Black), TurnStep::WhiteSelect)
    }

    /// Discards the current game and starts over.
    pub fn reset(&mut self) {
        *self = Self::new_game();
        tracing::debug!("game reset");
    }

    /// Builds a state from raw registers with no history, then derives
    /// destination sets and any pending promotion.
    pub(crate) fn from_registers(white: PieceRegister, black: PieceRegister, turn_step: TurnStep) -> Self {
        let mut state = Self {
            registers: [white, black],
            captured: [Vec::new(), Vec::new()],
            turn_step,
            selection: None,
            en_passant: [None, None],
            promotion: None,
            winner: None,
            game_over: false,
            destinations: [SideDestinations::default(), SideDestinations::default()],
        };
        state.refresh_destinations();
        state.rescan_promotions();
        state
    }

    // --- queries ---

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.turn_step.side()
    }

    #[inline]
    pub fn turn_step(&self) -> TurnStep {
        self.turn_step
    }

    /// Register index of the selected piece of the side to move.
    #[inline]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    #[inline]
    pub fn register(&self, side: Side) -> &PieceRegister {
        &self.registers[side.index()]
    }

    #[inline]
    pub fn pieces(&self, side: Side) -> &[PieceKind] {
        self.register(side).kinds()
    }

    #[inline]
    pub fn locations(&self, side: Side) -> &[Square] {
        self.register(side).locations()
    }

    #[inline]
    pub fn moved_flags(&self, side: Side) -> &[bool] {
        self.register(side).moved_flags()
    }

    /// Pieces `side` has taken from its opponent.
    #[inline]
    pub fn captured_by(&self, side: Side) -> &[PieceKind] {
        &self.captured[side.index()]
    }

    /// Square behind `side`'s last double pawn push, if its last move was one.
    #[inline]
    pub fn en_passant_target(&self, side: Side) -> Option<Square> {
        self.en_passant[side.index()]
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.promotion
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Per-piece destination sets and castling list for `side`.
    #[inline]
    pub fn legal_destinations(&self, side: Side) -> &SideDestinations {
        &self.destinations[side.index()]
    }

    pub fn piece_at(&self, square: Square) -> Option<(Side, PieceKind)> {
        [Side::White, Side::Black].into_iter().find_map(|side| {
            let register = self.register(side);
            register
                .index_at(square)
                .map(|index| (side, register.kind(index)))
        })
    }

    /// Destination set of whichever piece stands on `square`.
    pub fn destinations_from(&self, square: Square) -> Option<&[Square]> {
        let (side, _) = self.piece_at(square)?;
        let index = self.register(side).index_at(square)?;
        Some(self.legal_destinations(side).for_piece(index))
    }

    pub fn is_in_check(&self, side: Side) -> bool {
        is_king_in_check(
            self.register(side),
            self.legal_destinations(side.opposite()),
        )
    }

    /// Every `(from, to)` request `side` could make right now: plain
    /// destinations in register order, then castles for the king.
    pub fn candidate_moves(&self, side: Side) -> Vec<ChessMove> {
        let register = self.register(side);
        let destinations = self.legal_destinations(side);
        let mut moves = Vec::with_capacity(destinations.total() + destinations.castling.len());

        for (index, _, from) in register.iter() {
            for to in destinations.for_piece(index) {
                moves.push(ChessMove::new(from, *to));
            }
        }
        if let Some(king) = register.king_square() {
            for castle in &destinations.castling {
                moves.push(ChessMove::new(king, castle.king_to));
            }
        }

        moves
    }

    // --- derived state ---

    /// Recomputes both sides' destination sets. Plain destinations come
    /// first for both sides because castling reads the opponent's sets.
    pub(crate) fn refresh_destinations(&mut self) {
        let [white, black] = &self.registers;
        let white_view = BoardView {
            side: Side::White,
            own: white,
            enemy: black,
            enemy_en_passant: self.en_passant[Side::Black.index()],
        };
        let black_view = BoardView {
            side: Side::Black,
            own: black,
            enemy: white,
            enemy_en_passant: self.en_passant[Side::White.index()],
        };

        let mut white_sets = SideDestinations {
            per_piece: generate_destinations(&white_view),
            castling: Vec::new(),
        };
        let mut black_sets = SideDestinations {
            per_piece: generate_destinations(&black_view),
            castling: Vec::new(),
        };
        white_sets.castling = generate_castling_moves(Side::White, white, black, &black_sets);
        black_sets.castling = generate_castling_moves(Side::Black, black, white, &white_sets);

        self.destinations = [white_sets, black_sets];
    }

    /// Marks a promotion pending if one of `side`'s pawns stands on its
    /// far rank.
    pub(crate) fn scan_promotion(&mut self, side: Side) {
        let register = self.register(side);
        let found = register
            .iter()
            .find(|(_, kind, location)| *kind == PieceKind::Pawn && location.rank == side.far_rank())
            .map(|(index, _, _)| PendingPromotion { side, index });
        if let Some(pending) = found {
            tracing::debug!(?pending, "promotion pending");
            self.promotion = Some(pending);
        }
    }

    /// Clears and re-derives pending promotion for a freshly loaded state.
    pub(crate) fn rescan_promotions(&mut self) {
        self.promotion = None;
        self.scan_promotion(Side::White);
        if self.promotion.is_none() {
            self.scan_promotion(Side::Black);
        }
    }
}
