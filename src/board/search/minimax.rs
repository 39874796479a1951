use super::constants::{INFINITY, MATE_SCORE};
use super::SearchStats;
use crate::board::{Board, Color};

/// Fixed-depth minimax with alpha-beta pruning.
///
/// Scores are from `my_color`'s point of view. `maximizing` says whether
/// `my_color` is the side to move at this node. Each child is searched on
/// its own copy of the board.
pub(crate) fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    my_color: Color,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    if depth == 0 {
        return board.evaluate(my_color);
    }

    let mover = if maximizing {
        my_color
    } else {
        my_color.opponent()
    };
    let moves = board.all_legal_moves(mover);
    if moves.is_empty() {
        if board.is_king_in_check(mover) {
            return if maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        return 0;
    }

    if maximizing {
        let mut best = -INFINITY;
        for mv in moves {
            let mut child = board.clone();
            if !child.play(mv) {
                continue;
            }
            let score = minimax(&child, depth - 1, alpha, beta, false, my_color, stats);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            let mut child = board.clone();
            if !child.play(mv) {
                continue;
            }
            let score = minimax(&child, depth - 1, alpha, beta, true, my_color, stats);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}
