//! Errors used throughout the rules engine.
//!
//! Every failure in the core is local and recoverable: a rejected request
//! leaves the game state untouched, so callers can simply retry with a
//! different input. The enums are split by the operation family that raises
//! them so callers only match on what they can actually receive.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Side, Square};

/// Rejection reasons for `select_piece`, `try_make_move` and `resign`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game already has a winner.
    #[error("the game is already over")]
    GameOver,

    /// A pawn is waiting to be promoted; only `promote` is accepted.
    #[error("a promotion for {0:?} is pending")]
    PromotionPending(Side),

    /// The origin square does not hold a piece of the side to move.
    #[error("no {side:?} piece on {square}")]
    NotYourPiece { side: Side, square: Square },

    /// The destination is neither in the piece's destination set nor a
    /// castling destination.
    #[error("{from} -> {to} is not a legal destination")]
    IllegalDestination { from: Square, to: Square },

    /// A castle was requested but the king or rook is not on its
    /// canonical square.
    #[error("castling piece missing: expected {kind:?} on {square}")]
    MissingCastlePiece { kind: PieceKind, square: Square },
}

/// Rejection reasons for `promote`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionError {
    #[error("no promotion is pending")]
    NotPending,

    /// Pawns and kings are not valid promotion targets.
    #[error("cannot promote to {0:?}")]
    InvalidChoice(PieceKind),
}

/// Problems found while loading an externally supplied state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("{side:?} arrays disagree in length: {pieces} pieces, {locations} locations, {moved} moved flags")]
    MismatchedLengths {
        side: Side,
        pieces: usize,
        locations: usize,
        moved: usize,
    },

    #[error("square ({0}, {1}) is off the board")]
    OffBoard(i32, i32),

    #[error("two pieces occupy {0}")]
    DuplicateSquare(Square),

    #[error("turn step {0} is outside 0..=3")]
    InvalidTurnStep(u8),

    #[error("unknown winner '{0}'")]
    InvalidWinner(String),

    #[error("invalid position text: {0}")]
    InvalidPosition(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Failures reported by `Engine` implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOptionValue { name: String, value: String },

    /// An engine recommended a move the executor refused.
    #[error("{engine} played a rejected move: {reason}")]
    RejectedMove { engine: String, reason: MoveError },
}
