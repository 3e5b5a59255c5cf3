//! Engine-vs-engine self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --white minimax --black random --seed 7`
//! `RUST_LOG=capture_chess=debug cargo run --bin self_play`

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use capture_chess::engines::engine_minimax::MinimaxEngine;
use capture_chess::engines::engine_random::RandomEngine;
use capture_chess::engines::engine_trait::Engine;
use capture_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use capture_chess::game_state::chess_types::PieceKind;
use capture_chess::game_state::game_state::GameState;
use capture_chess::utils::algebraic::algebraic_to_move;
use capture_chess::utils::engine_match_harness::{play_engine_match_from_state, MatchConfig, MatchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Minimax,
    Random,
}

#[derive(Debug, Parser)]
#[command(about = "Play one engine-vs-engine game and print the moves")]
struct Args {
    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    white: EngineKind,

    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    black: EngineKind,

    /// Minimax search depth (1..=5).
    #[arg(long, default_value_t = 3)]
    depth: u8,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Random opening plies played before the engines take over.
    #[arg(long, default_value_t = 0)]
    opening_plies: u8,

    /// Start position as `<placement> <side>`.
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    start: String,

    /// Moves applied to the start position first, e.g. "e2e4 e7e5".
    #[arg(long, default_value = "")]
    moves: String,
}

fn build_engine(kind: EngineKind, depth: u8, seed: u64) -> Box<dyn Engine> {
    match kind {
        EngineKind::Minimax => Box::new(MinimaxEngine::with_difficulty(depth)),
        EngineKind::Random => Box::new(RandomEngine::seeded(seed)),
    }
}

fn starting_state(args: &Args) -> Result<GameState, Box<dyn std::error::Error>> {
    let mut state = GameState::from_fen(&args.start)?;
    for text in args.moves.split_whitespace() {
        let mv = algebraic_to_move(text)?;
        state.try_make_move(mv.from, mv.to)?;
        if state.pending_promotion().is_some() {
            state.promote(PieceKind::Queen)?;
        }
    }
    Ok(state)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let state = starting_state(&args)?;
    let mut white = build_engine(args.white, args.depth, args.seed);
    let mut black = build_engine(args.black, args.depth, args.seed.wrapping_add(1));

    let config = MatchConfig {
        max_plies: args.max_plies,
        opening_min_plies: args.opening_plies,
        opening_max_plies: args.opening_plies,
        ..MatchConfig::default()
    };
    let result = play_engine_match_from_state(state, white.as_mut(), black.as_mut(), args.seed, &config)?;

    println!("{} vs {}", white.name(), black.name());
    println!("moves: {}", result.move_list());
    match result.outcome {
        MatchOutcome::KingCaptured { winner } => println!("result: {} captured the king", winner.name()),
        MatchOutcome::NoMoves { side } => println!("result: {} had no move", side.name()),
        MatchOutcome::DrawMaxPlies => println!("result: ply limit reached"),
    }
    println!(
        "white: {} moves, {:.3} ms avg; black: {} moves, {:.3} ms avg",
        result.white_move_count,
        average_ms(result.white_total_time_ns, result.white_move_count),
        result.black_move_count,
        average_ms(result.black_total_time_ns, result.black_move_count),
    );
    println!("final position: {}", result.final_state.get_fen());
    Ok(())
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}
