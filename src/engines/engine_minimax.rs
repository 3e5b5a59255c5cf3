//! Minimax engine with configurable difficulty.
//!
//! Difficulty 1..=5 is the search depth. The remaining search switches are
//! exposed through `set_option` so callers can trade strength for speed.

use crate::chess_errors::EngineError;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::PositionalScorer;
use crate::search::minimax::{minimax_search, SearchConfig};

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

pub struct MinimaxEngine {
    config: SearchConfig,
    scorer: PositionalScorer,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: PositionalScorer,
        }
    }

    /// Engine searching `difficulty` plies, clamped to `1..=5`.
    pub fn with_difficulty(difficulty: u8) -> Self {
        Self::new(SearchConfig {
            depth: difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY),
            ..SearchConfig::default()
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, EngineError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| EngineError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        })
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "CaptureChess Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        match name.to_ascii_lowercase().as_str() {
            "depth" | "difficulty" => {
                let depth: u8 = parse_value(name, value)?;
                if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&depth) {
                    return Err(EngineError::InvalidOptionValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    });
                }
                self.config.depth = depth;
            }
            "quiescence" => self.config.quiescence = parse_value(name, value)?,
            "quiescencewidth" => self.config.quiescence_width = parse_value(name, value)?,
            "moveordering" => self.config.move_ordering = parse_value(name, value)?,
            _ => return Err(EngineError::UnknownOption(name.to_string())),
        }
        tracing::debug!(name, value, "engine option set");
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> Result<EngineOutput, EngineError> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth),
            ..self.config
        };
        let result = minimax_search(game_state, &self.scorer, &config);

        tracing::info!(
            side = ?game_state.side_to_move(),
            best_move = ?result.best_move,
            score = result.score,
            "minimax engine decided"
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.score),
            info_lines: vec![format!(
                "info depth {} nodes {} score {}",
                result.depth, result.nodes, result.score
            )],
        })
    }
}
