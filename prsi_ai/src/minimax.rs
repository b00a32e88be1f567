//! Depth-limited minimax with alpha-beta pruning over [`SimState`]s.
//!
//! The computer maximizes, the human minimizes. Scores:
//! - [`WIN_SCORE`] / `-WIN_SCORE` once a hand is empty,
//! - the hand-size difference from [`SimState::evaluate()`] at the depth limit,
//! - that difference shifted by [`DRAW_PENALTY`] against a side that has to draw.
//!
//! Ties keep the first move in generation order.

use crate::{Move, SimState};

pub const WIN_SCORE: i32 = 100;
pub const DRAW_PENALTY: i32 = 10;
/// How many plies the computer looks ahead.
pub const SEARCH_DEPTH: u32 = 4;

/// Searches from `state` with a full window.
///
/// Returns the score and the best move of the side to move, if it has one.
pub fn search(state: &SimState, depth: u32, maximizing: bool) -> (i32, Option<Move>) {
    minimax(state, depth, maximizing, i32::MIN, i32::MAX)
}

pub fn minimax(
    state: &SimState,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<Move>) {
    if state.computer.is_empty() {
        return (WIN_SCORE, None);
    }
    if state.human.is_empty() {
        return (-WIN_SCORE, None);
    }
    if depth == 0 {
        return (state.evaluate(), None);
    }

    let moves = state.valid_moves(maximizing);
    if moves.is_empty() {
        if state.facing_active_ace() {
            // Standing is free, so it does not use up depth
            let (score, _) = minimax(&state.stand(), depth, !maximizing, alpha, beta);
            return (score, None);
        }
        let penalty = if maximizing { -DRAW_PENALTY } else { DRAW_PENALTY };
        return (state.evaluate() + penalty, None);
    }

    let mut best_move = None;
    if maximizing {
        let mut max_eval = i32::MIN;
        for mv in moves {
            let (score, _) = minimax(&state.apply(mv, true), depth - 1, false, alpha, beta);
            if score > max_eval {
                max_eval = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        (max_eval, best_move)
    } else {
        let mut min_eval = i32::MAX;
        for mv in moves {
            let (score, _) = minimax(&state.apply(mv, false), depth - 1, true, alpha, beta);
            if score < min_eval {
                min_eval = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (min_eval, best_move)
    }
}
