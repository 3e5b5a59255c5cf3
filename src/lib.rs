//! Crate root module declarations for the capture-chess rules engine.
//!
//! Exposes the board state, move generation and execution, the minimax
//! search, the engine seam and the text/match utilities under stable module
//! paths for the diagnostic binary, benches and external tooling. The game
//! is won by capturing the opposing king.

pub mod chess_errors;

pub mod game_state {
    pub mod board_record;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece_register;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_castling;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod move_ordering;
}

pub mod tables {
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
}
