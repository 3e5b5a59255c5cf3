//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on one `GameState`,
//! with an optional seeded random opening prefix. Pending promotions are
//! completed with a queen since engines only recommend `(from, to)` pairs.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::{EngineError, MoveError};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::{PieceKind, Side};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// `winner` took the opposing king.
    KingCaptured { winner: Side },
    /// The engine to move had nothing to play.
    NoMoves { side: Side },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 0,
            opening_max_plies: 0,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<ChessMove>,
    pub played_moves: Vec<ChessMove>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    /// Opening and engine moves joined as coordinate text.
    pub fn move_list(&self) -> String {
        self.opening_moves
            .iter()
            .chain(&self.played_moves)
            .map(ChessMove::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Play a single seeded engine-vs-engine match from the starting position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, EngineError> {
    play_engine_match_from_state(GameState::new_game(), engine_white, engine_black, seed, config)
}

pub fn play_engine_match_from_state(
    mut state: GameState,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, EngineError> {
    engine_white.new_game();
    engine_black.new_game();

    let opening_moves = apply_seeded_random_opening(
        &mut state,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state.clone(),
        opening_moves,
        played_moves: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(winner) = state.winner() {
            result.outcome = MatchOutcome::KingCaptured { winner };
            break;
        }

        let side = state.side_to_move();
        let engine: &mut dyn Engine = match side {
            Side::White => &mut *engine_white,
            Side::Black => &mut *engine_black,
        };

        let started = Instant::now();
        let output = engine.choose_move(&state, &config.go_params)?;
        let elapsed = started.elapsed().as_nanos();
        match side {
            Side::White => {
                result.white_move_count += 1;
                result.white_total_time_ns += elapsed;
            }
            Side::Black => {
                result.black_move_count += 1;
                result.black_total_time_ns += elapsed;
            }
        }

        let Some(mv) = output.best_move else {
            result.outcome = MatchOutcome::NoMoves { side };
            break;
        };
        play_with_auto_queen(&mut state, mv).map_err(|reason| EngineError::RejectedMove {
            engine: engine.name().to_string(),
            reason,
        })?;
        tracing::debug!(?side, %mv, "match move");
        result.played_moves.push(mv);
    }

    // The final ply may have captured the king.
    if let (MatchOutcome::DrawMaxPlies, Some(winner)) = (result.outcome, state.winner()) {
        result.outcome = MatchOutcome::KingCaptured { winner };
    }

    tracing::info!(outcome = ?result.outcome, plies = result.played_moves.len(), "match finished");
    result.final_state = state;
    Ok(result)
}

fn play_with_auto_queen(state: &mut GameState, mv: ChessMove) -> Result<(), MoveError> {
    state.try_make_move(mv.from, mv.to)?;
    if state.pending_promotion().is_some() {
        // Queen is always a valid choice.
        let _ = state.promote(PieceKind::Queen);
    }
    Ok(())
}

/// Plays a seeded number of uniformly random plies in
/// `min_plies..=max_plies`, stopping early if the game ends or a side runs
/// out of moves.
fn apply_seeded_random_opening(state: &mut GameState, seed: u64, min_plies: u8, max_plies: u8) -> Vec<ChessMove> {
    let mut rng = StdRng::seed_from_u64(seed);
    let plies = if max_plies > min_plies {
        rng.random_range(min_plies..=max_plies)
    } else {
        min_plies
    };

    let mut moves = Vec::with_capacity(plies as usize);
    for _ in 0..plies {
        if state.is_game_over() {
            break;
        }
        let candidates = state.candidate_moves(state.side_to_move());
        let Some(mv) = candidates.choose(&mut rng).copied() else {
            break;
        };
        if play_with_auto_queen(state, mv).is_err() {
            break;
        }
        moves.push(mv);
    }
    moves
}
