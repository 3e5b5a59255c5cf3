//! Random-move engine.
//!
//! Picks uniformly among the side to move's candidate moves. Used for
//! diagnostics, self-play smoke tests and as the weakest opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::EngineError;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible engine: the same seed yields the same move sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "CaptureChess Random"
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> Result<EngineOutput, EngineError> {
        let candidates = game_state.candidate_moves(game_state.side_to_move());

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine candidates {}",
            candidates.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        if game_state.is_game_over() {
            return Ok(out);
        }
        out.best_move = candidates.choose(&mut self.rng).copied();
        Ok(out)
    }
}
