//! Fixed-depth minimax with alpha-beta pruning and capture quiescence.
//!
//! Scores follow `BoardScorer`: White maximizes, Black minimizes. Each
//! candidate is played on a clone through the real executor, so the search
//! sees exactly the rules a player would. A promotion left pending by a
//! synthetic move is completed with a queen, and a candidate the executor
//! rejects simply drops out of the tree.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{PieceKind, Side};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::{capture_moves, order_moves};

const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Full-width plies below the root.
    pub depth: u8,
    pub quiescence: bool,
    /// Captures examined per quiescence node, best-ordered first.
    pub quiescence_width: usize,
    /// Capture plies quiescence may chain.
    pub quiescence_depth: u8,
    pub move_ordering: bool,
    /// Alpha-beta cutoffs. Off searches the identical tree exhaustively.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            quiescence: true,
            quiescence_width: 5,
            quiescence_depth: 4,
            move_ordering: true,
            pruning: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub score: i32,
    pub nodes: u64,
    pub depth: u8,
}

/// Plays `mv` on a copy of `game_state`, auto-promoting to a queen.
/// Returns `None` when the executor rejects the move.
pub fn play_candidate(game_state: &GameState, mv: ChessMove) -> Option<GameState> {
    let mut child = game_state.clone();
    if let Err(err) = child.try_make_move(mv.from, mv.to) {
        tracing::trace!(%mv, %err, "candidate rejected");
        return None;
    }
    if child.pending_promotion().is_some() {
        child.promote(PieceKind::Queen).ok()?;
    }
    Some(child)
}

struct Searcher<'a, S: BoardScorer> {
    scorer: &'a S,
    config: &'a SearchConfig,
    nodes: u64,
}

impl<S: BoardScorer> Searcher<'_, S> {
    fn candidates(&self, game_state: &GameState, side: Side) -> Vec<ChessMove> {
        let mut moves = game_state.candidate_moves(side);
        if self.config.move_ordering {
            order_moves(game_state, side, &mut moves);
        }
        moves
    }

    fn minimax(&mut self, game_state: &GameState, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if game_state.is_game_over() {
            return self.scorer.score(game_state);
        }
        if depth == 0 {
            return if self.config.quiescence {
                self.quiescence(game_state, self.config.quiescence_depth, alpha, beta)
            } else {
                self.scorer.score(game_state)
            };
        }

        let side = game_state.side_to_move();
        let maximizing = side == Side::White;
        let mut best: Option<i32> = None;

        for mv in self.candidates(game_state, side) {
            let Some(child) = play_candidate(game_state, mv) else {
                continue;
            };
            let score = self.minimax(&child, depth - 1, alpha, beta);

            if maximizing {
                best = Some(best.map_or(score, |b| b.max(score)));
                alpha = alpha.max(score);
            } else {
                best = Some(best.map_or(score, |b| b.min(score)));
                beta = beta.min(score);
            }
            if self.config.pruning && beta <= alpha {
                break;
            }
        }

        // No playable move: fall back to the static evaluation.
        best.unwrap_or_else(|| self.scorer.score(game_state))
    }

    fn quiescence(&mut self, game_state: &GameState, depth_left: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        let stand_pat = self.scorer.score(game_state);
        if game_state.is_game_over() || depth_left == 0 {
            return stand_pat;
        }

        let side = game_state.side_to_move();
        let maximizing = side == Side::White;
        let pruning = self.config.pruning;

        if pruning {
            if maximizing {
                if stand_pat >= beta {
                    return beta;
                }
                alpha = alpha.max(stand_pat);
            } else {
                if stand_pat <= alpha {
                    return alpha;
                }
                beta = beta.min(stand_pat);
            }
        }

        let mut captures = capture_moves(game_state, side);
        if self.config.move_ordering {
            order_moves(game_state, side, &mut captures);
        }
        captures.truncate(self.config.quiescence_width);

        let mut best = stand_pat;
        for mv in captures {
            let Some(child) = play_candidate(game_state, mv) else {
                continue;
            };
            let score = self.quiescence(&child, depth_left - 1, alpha, beta);

            if !pruning {
                best = if maximizing { best.max(score) } else { best.min(score) };
                continue;
            }
            if maximizing {
                if score >= beta {
                    return beta;
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    return alpha;
                }
                beta = beta.min(score);
            }
        }

        match (pruning, maximizing) {
            (false, _) => best,
            (true, true) => alpha,
            (true, false) => beta,
        }
    }
}

/// Searches `config.depth` plies from `game_state` for the side to move.
///
/// `best_move` is `None` when the game is over, the depth is zero, or the
/// side to move has no playable candidate; `score` is then the static
/// evaluation.
pub fn minimax_search<S: BoardScorer>(game_state: &GameState, scorer: &S, config: &SearchConfig) -> SearchResult {
    let mut searcher = Searcher {
        scorer,
        config,
        nodes: 1,
    };

    if game_state.is_game_over() || config.depth == 0 {
        return SearchResult {
            best_move: None,
            score: scorer.score(game_state),
            nodes: 1,
            depth: 0,
        };
    }

    let side = game_state.side_to_move();
    let maximizing = side == Side::White;
    let mut alpha = -SCORE_INFINITY;
    let mut beta = SCORE_INFINITY;
    let mut best: Option<(ChessMove, i32)> = None;

    for mv in searcher.candidates(game_state, side) {
        let Some(child) = play_candidate(game_state, mv) else {
            continue;
        };
        let score = searcher.minimax(&child, config.depth - 1, alpha, beta);
        tracing::trace!(%mv, score, "root candidate");

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
        if config.pruning {
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }
    }

    let result = match best {
        Some((mv, score)) => SearchResult {
            best_move: Some(mv),
            score,
            nodes: searcher.nodes,
            depth: config.depth,
        },
        None => SearchResult {
            best_move: None,
            score: scorer.score(game_state),
            nodes: searcher.nodes,
            depth: config.depth,
        },
    };

    tracing::debug!(
        ?side,
        best_move = ?result.best_move,
        score = result.score,
        nodes = result.nodes,
        depth = result.depth,
        "search finished"
    );
    result
}
