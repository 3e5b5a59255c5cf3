//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! recommenders can be selected at runtime behind a single trait. An adapter
//! for an external full-strength engine plugs in at this seam as well.

use crate::chess_errors::EngineError;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    /// White-relative evaluation, when the engine produces one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), EngineError> {
        Err(EngineError::UnknownOption(name.to_string()))
    }

    /// Recommends a move for the side to move. `best_move` is `None` when
    /// there is nothing to play.
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> Result<EngineOutput, EngineError>;
}
