use crate::apply::advance;
use crate::movegen::get_all_legal_moves;
use crate::state::GameState;

/// Count the leaf nodes of the legal move tree `depth` plies deep.
pub fn perft(state: &GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = get_all_legal_moves(state, state.turn);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .filter_map(|m| advance(state, m).ok())
        .map(|next| perft(&next, depth - 1))
        .sum()
}

/// Per-root-move perft counts, keyed by UCI move text, in generation order.
pub fn divide(state: &GameState, depth: usize) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    get_all_legal_moves(state, state.turn)
        .iter()
        .filter_map(|m| advance(state, m).ok().map(|next| (m.to_uci(), perft(&next, depth - 1))))
        .collect()
}
