//! Candidate move ordering for the search.
//!
//! Priority is the value of the piece standing on the destination plus a
//! tenth of the mover's value, so captures of valuable pieces come first and
//! ties lean toward moving the heavier piece. Sorting is stable: equal
//! priorities keep generation order.

use std::cmp::Reverse;

use crate::game_state::chess_types::Side;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::piece_value;

pub fn move_priority(game_state: &GameState, side: Side, mv: ChessMove) -> i32 {
    let own = game_state.register(side);
    let enemy = game_state.register(side.opposite());

    let captured = enemy
        .index_at(mv.to)
        .map_or(0, |index| piece_value(enemy.kind(index)));
    let mover = own
        .index_at(mv.from)
        .map_or(0, |index| piece_value(own.kind(index)) / 10);

    captured + mover
}

pub fn order_moves(game_state: &GameState, side: Side, moves: &mut [ChessMove]) {
    moves.sort_by_cached_key(|mv| Reverse(move_priority(game_state, side, *mv)));
}

/// Moves from `side`'s destination sets that land on an enemy piece.
pub fn capture_moves(game_state: &GameState, side: Side) -> Vec<ChessMove> {
    let enemy = game_state.register(side.opposite());
    let destinations = game_state.legal_destinations(side);

    game_state
        .register(side)
        .iter()
        .flat_map(|(index, _, from)| {
            destinations
                .for_piece(index)
                .iter()
                .filter(|to| enemy.occupies(**to))
                .map(move |to| ChessMove::new(from, *to))
        })
        .collect()
}
