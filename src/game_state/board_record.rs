//! Wire form of a `GameState`.
//!
//! `BoardRecord` mirrors the network payload the board is exchanged in:
//! camelCase keys, squares as `[file, rank]` pairs, `[100, 100]` for "no
//! en-passant target" and the winner as `""`, `"white"` or `"black"`.
//! Destination sets are not part of the record; they are recomputed on load.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::chess_errors::StateError;
use crate::game_state::chess_types::{PieceKind, Side, Square, TurnStep};
use crate::game_state::game_state::GameState;
use crate::game_state::piece_register::PieceRegister;

/// Serialized stand-in for an absent en-passant target.
pub const NO_SQUARE: [i32; 2] = [100, 100];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord {
    pub white_pieces: Vec<PieceKind>,
    pub white_locations: Vec<[i32; 2]>,
    #[serde(default)]
    pub white_moved: Vec<bool>,
    pub black_pieces: Vec<PieceKind>,
    pub black_locations: Vec<[i32; 2]>,
    #[serde(default)]
    pub black_moved: Vec<bool>,
    /// Black pieces White has captured.
    pub captured_pieces_white: Vec<PieceKind>,
    /// White pieces Black has captured.
    pub captured_pieces_black: Vec<PieceKind>,
    pub turn_step: u8,
    pub white_ep: [i32; 2],
    pub black_ep: [i32; 2],
    pub winner: String,
    pub game_over: bool,
}

fn square_to_pair(square: Square) -> [i32; 2] {
    [i32::from(square.file), i32::from(square.rank)]
}

fn pair_to_square([file, rank]: [i32; 2]) -> Result<Square, StateError> {
    u8::try_from(file)
        .ok()
        .zip(u8::try_from(rank).ok())
        .and_then(|(file, rank)| Square::new(file, rank))
        .ok_or(StateError::OffBoard(file, rank))
}

fn en_passant_to_pair(target: Option<Square>) -> [i32; 2] {
    target.map_or(NO_SQUARE, square_to_pair)
}

fn pair_to_en_passant(pair: [i32; 2]) -> Result<Option<Square>, StateError> {
    if pair == NO_SQUARE {
        Ok(None)
    } else {
        pair_to_square(pair).map(Some)
    }
}

fn winner_to_string(winner: Option<Side>) -> String {
    winner.map(Side::name).unwrap_or_default().to_string()
}

fn string_to_winner(text: &str) -> Result<Option<Side>, StateError> {
    match text {
        "" => Ok(None),
        "white" => Ok(Some(Side::White)),
        "black" => Ok(Some(Side::Black)),
        other => Err(StateError::InvalidWinner(other.to_string())),
    }
}

/// Rebuilds one side's register, checking the parallel arrays line up.
/// An empty moved array means "nothing has moved".
fn load_register(
    side: Side,
    pieces: &[PieceKind],
    locations: &[[i32; 2]],
    moved: &[bool],
) -> Result<PieceRegister, StateError> {
    let moved_len_ok = moved.is_empty() || moved.len() == pieces.len();
    if pieces.len() != locations.len() || !moved_len_ok {
        return Err(StateError::MismatchedLengths {
            side,
            pieces: pieces.len(),
            locations: locations.len(),
            moved: moved.len(),
        });
    }

    let mut register = PieceRegister::new();
    for (index, (kind, pair)) in pieces.iter().zip(locations).enumerate() {
        let square = pair_to_square(*pair)?;
        register.push(*kind, square, moved.get(index).copied().unwrap_or(false));
    }
    Ok(register)
}

impl GameState {
    pub fn serialize(&self) -> BoardRecord {
        let white = self.register(Side::White);
        let black = self.register(Side::Black);
        BoardRecord {
            white_pieces: white.kinds().to_vec(),
            white_locations: white.locations().iter().copied().map(square_to_pair).collect(),
            white_moved: white.moved_flags().to_vec(),
            black_pieces: black.kinds().to_vec(),
            black_locations: black.locations().iter().copied().map(square_to_pair).collect(),
            black_moved: black.moved_flags().to_vec(),
            captured_pieces_white: self.captured_by(Side::White).to_vec(),
            captured_pieces_black: self.captured_by(Side::Black).to_vec(),
            turn_step: self.turn_step().as_u8(),
            white_ep: en_passant_to_pair(self.en_passant_target(Side::White)),
            black_ep: en_passant_to_pair(self.en_passant_target(Side::Black)),
            winner: winner_to_string(self.winner()),
            game_over: self.is_game_over(),
        }
    }

    /// Loads and validates a record, then recomputes destination sets and
    /// pending promotion.
    pub fn deserialize(record: &BoardRecord) -> Result<Self, StateError> {
        let white = load_register(
            Side::White,
            &record.white_pieces,
            &record.white_locations,
            &record.white_moved,
        )?;
        let black = load_register(
            Side::Black,
            &record.black_pieces,
            &record.black_locations,
            &record.black_moved,
        )?;

        let mut occupied = HashSet::new();
        for square in white.locations().iter().chain(black.locations()) {
            if !occupied.insert(*square) {
                return Err(StateError::DuplicateSquare(*square));
            }
        }

        let turn_step =
            TurnStep::from_u8(record.turn_step).ok_or(StateError::InvalidTurnStep(record.turn_step))?;
        let en_passant = [
            pair_to_en_passant(record.white_ep)?,
            pair_to_en_passant(record.black_ep)?,
        ];
        let winner = string_to_winner(&record.winner)?;

        let mut state = Self::from_registers(white, black, turn_step);
        state.captured = [
            record.captured_pieces_white.clone(),
            record.captured_pieces_black.clone(),
        ];
        state.en_passant = en_passant;
        state.winner = winner;
        state.game_over = record.game_over || winner.is_some();
        // En-passant targets feed pawn destinations.
        state.refresh_destinations();

        tracing::debug!(turn_step = record.turn_step, "state loaded");
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    pub fn from_json(text: &str) -> Result<Self, StateError> {
        let record: BoardRecord = serde_json::from_str(text)?;
        Self::deserialize(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardRecord, NO_SQUARE};
    use crate::chess_errors::StateError;
    use crate::game_state::chess_types::{PieceKind, Side, Square};
    use crate::game_state::game_state::GameState;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn record_uses_network_field_names() {
        let mut game = GameState::new_game();
        assert!(game.make_move(sq(4, 1), sq(4, 3)));
        let json = game.to_json().unwrap();

        for key in [
            "\"whitePieces\"",
            "\"whiteLocations\"",
            "\"blackPieces\"",
            "\"capturedPiecesWhite\"",
            "\"turnStep\":2",
            "\"whiteEp\":[4,2]",
            "\"blackEp\":[100,100]",
            "\"winner\":\"\"",
            "\"gameOver\":false",
        ] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
        assert!(json.contains("\"rook\""));
    }

    #[test]
    fn reloaded_state_has_identical_destinations() {
        let mut game = GameState::new_game();
        for (from, to) in [
            (sq(4, 1), sq(4, 3)),
            (sq(3, 6), sq(3, 4)),
            (sq(4, 3), sq(3, 4)),
            (sq(4, 7), sq(3, 6)),
        ] {
            assert!(game.make_move(from, to));
        }

        let restored = GameState::from_json(&game.to_json().unwrap()).unwrap();
        for side in [Side::White, Side::Black] {
            assert_eq!(restored.legal_destinations(side), game.legal_destinations(side));
        }
        assert_eq!(restored.captured_by(Side::White), &[PieceKind::Pawn]);
        assert_eq!(restored, game);
    }

    #[test]
    fn missing_moved_arrays_default_to_unmoved() {
        let mut record = GameState::new_game().serialize();
        record.white_moved.clear();
        record.black_moved.clear();
        let json = serde_json::to_string(&record)
            .unwrap()
            .replace(",\"whiteMoved\":[]", "")
            .replace(",\"blackMoved\":[]", "");
        assert!(!json.contains("Moved"));

        let game = GameState::from_json(&json).unwrap();
        assert!(game.moved_flags(Side::White).iter().all(|moved| !moved));
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn invalid_records_are_rejected() {
        let base = GameState::new_game().serialize();

        let mut short = base.clone();
        short.white_locations.pop();
        assert!(matches!(
            GameState::deserialize(&short),
            Err(StateError::MismatchedLengths { side: Side::White, .. })
        ));

        let mut off_board = base.clone();
        off_board.black_locations[0] = [8, 0];
        assert!(matches!(GameState::deserialize(&off_board), Err(StateError::OffBoard(8, 0))));

        let mut stacked = base.clone();
        stacked.black_locations[0] = [0, 0];
        assert!(matches!(
            GameState::deserialize(&stacked),
            Err(StateError::DuplicateSquare(_))
        ));

        let mut bad_step = base.clone();
        bad_step.turn_step = 4;
        assert!(matches!(GameState::deserialize(&bad_step), Err(StateError::InvalidTurnStep(4))));

        let mut bad_winner: BoardRecord = base;
        bad_winner.winner = "red".to_string();
        assert!(matches!(
            GameState::deserialize(&bad_winner),
            Err(StateError::InvalidWinner(_))
        ));

        assert!(matches!(GameState::from_json("{"), Err(StateError::Json(_))));
    }

    #[test]
    fn loaded_pawn_on_far_rank_is_pending_promotion() {
        let mut record = GameState::new_game().serialize();
        // Move White's a-pawn onto Black's emptied a8 corner.
        let rook = record.black_locations.iter().position(|pair| *pair == [0, 7]).unwrap();
        record.black_pieces.remove(rook);
        record.black_locations.remove(rook);
        record.black_moved.remove(rook);
        record.white_locations[8] = [0, 7];
        record.white_ep = NO_SQUARE;

        let game = GameState::deserialize(&record).unwrap();
        let pending = game.pending_promotion().expect("pending promotion");
        assert_eq!(pending.side, Side::White);
        assert_eq!(pending.index, 8);
    }

    #[test]
    fn winner_round_trips_and_ends_game() {
        let mut record = GameState::new_game().serialize();
        record.winner = "black".to_string();
        let game = GameState::deserialize(&record).unwrap();
        assert_eq!(game.winner(), Some(Side::Black));
        assert!(game.is_game_over());
        assert_eq!(game.serialize().winner, "black");
    }
}
