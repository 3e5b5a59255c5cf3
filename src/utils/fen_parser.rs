//! Text position parser.
//!
//! Accepts `<placement> <side>`: standard FEN piece placement (rank 8
//! first, upper case for White) and `w`/`b` for the side to select. Each
//! side's pieces enter its register scanning from its own back rank toward
//! the far rank, file a to h, so the starting position reproduces the
//! canonical register order. Moved
//! flags are inferred from where pawns, kings and rooks stand.

use crate::chess_errors::StateError;
use crate::game_state::chess_rules::king_start_square;
use crate::game_state::chess_types::{PieceKind, Side, Square, TurnStep};
use crate::game_state::game_state::GameState;
use crate::game_state::piece_register::PieceRegister;

type Placement = [[Option<(Side, PieceKind)>; 8]; 8];

pub fn parse_fen(fen: &str) -> Result<GameState, StateError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| invalid("missing piece placement"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    if parts.next().is_some() {
        return Err(invalid("position has extra trailing fields"));
    }

    let placement = parse_board(board_part)?;
    let side = parse_side_to_move(side_part)?;

    let white = collect_register(&placement, Side::White);
    let black = collect_register(&placement, Side::Black);
    Ok(GameState::from_registers(white, black, TurnStep::select_step(side)))
}

fn invalid(message: impl Into<String>) -> StateError {
    StateError::InvalidPosition(message.into())
}

fn parse_board(board_part: &str) -> Result<Placement, StateError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("placement must contain 8 ranks"));
    }

    let mut placement: Placement = [[None; 8]; 8];
    for (text_rank, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - text_rank;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let kind = PieceKind::from_letter(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            let owner = if ch.is_ascii_uppercase() {
                Side::White
            } else {
                Side::Black
            };
            if file >= 8 {
                return Err(invalid("rank has too many files"));
            }
            placement[board_rank][file] = Some((owner, kind));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(placement)
}

fn collect_register(placement: &Placement, side: Side) -> PieceRegister {
    let ranks: Vec<u8> = match side {
        Side::White => (0..8).collect(),
        Side::Black => (0..8).rev().collect(),
    };

    let mut register = PieceRegister::new();
    for rank in ranks {
        for file in 0..8u8 {
            if let Some((owner, kind)) = placement[rank as usize][file as usize] {
                if owner == side {
                    let square = Square { file, rank };
                    register.push(kind, square, infer_moved(side, kind, square));
                }
            }
        }
    }
    register
}

fn parse_side_to_move(side_part: &str) -> Result<Side, StateError> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(invalid(format!("invalid side to move '{side_part}'"))),
    }
}

fn infer_moved(side: Side, kind: PieceKind, square: Square) -> bool {
    match kind {
        PieceKind::Pawn => square.rank != side.pawn_rank(),
        PieceKind::King => square != king_start_square(side),
        PieceKind::Rook => square.rank != side.back_rank() || !matches!(square.file, 0 | 7),
        _ => false,
    }
}

impl GameState {
    pub fn from_fen(fen: &str) -> Result<Self, StateError> {
        parse_fen(fen)
    }
}
