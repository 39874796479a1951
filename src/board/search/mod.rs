//! Opponent move selection.
//!
//! Every root move is scored with a fixed-depth minimax search with
//! alpha-beta pruning over the static evaluation. All root moves scoring
//! within [`SearchParams::tolerance`] of the best are kept as candidates and
//! one of them is picked at random, so the automated side does not repeat
//! itself from equal positions.

mod constants;
mod minimax;
mod params;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Board, Color, Move};
pub use constants::{INFINITY, MATE_SCORE};
pub use params::SearchParams;

use minimax::minimax;

/// Counters collected while searching, reported at `debug` level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Move chooser owning its parameters and random source.
#[derive(Clone, Debug)]
pub struct Searcher {
    params: SearchParams,
    rng: StdRng,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Default parameters, seeded once from the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(SearchParams::default())
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        Searcher {
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Deterministic searcher: the same seed and position give the same move.
    #[must_use]
    pub fn with_seed(params: SearchParams, seed: u64) -> Self {
        Searcher {
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Pick a move for `side` in `board`, or `None` if `side` has no legal
    /// move.
    pub fn choose_move(&mut self, side: Color, board: &Board) -> Option<Move> {
        choose_move_with(&mut self.rng, &self.params, side, board)
    }
}

/// Pick a move for `side` using the given random source.
///
/// `board` is only read; `side` is treated as the side to move whatever the
/// board says. The returned move is always legal for `side`.
pub fn choose_move_with<R: Rng + ?Sized>(
    rng: &mut R,
    params: &SearchParams,
    side: Color,
    board: &Board,
) -> Option<Move> {
    let mut root = board.clone();
    root.side_to_move = side;

    let moves = root.all_legal_moves(side);
    if moves.is_empty() {
        log::debug!("search: {side} has no legal moves");
        return None;
    }

    let mut stats = SearchStats::default();
    let child_depth = params.depth.saturating_sub(1);
    let mut scored: Vec<(Move, i32)> = Vec::with_capacity(moves.len());
    for mv in moves {
        let mut child = root.clone();
        if !child.play(mv) {
            continue;
        }
        let score = minimax(&child, child_depth, -INFINITY, INFINITY, false, side, &mut stats);
        log::trace!("search: {mv} scores {score}");
        scored.push((mv, score));
    }

    let best = scored.iter().map(|&(_, score)| score).max()?;
    let candidates: Vec<Move> = scored
        .iter()
        .filter(|&&(_, score)| score >= best - params.tolerance)
        .map(|&(mv, _)| mv)
        .collect();
    let chosen = candidates.choose(rng).copied();

    if let Some(mv) = chosen {
        log::debug!(
            "search: {side} plays {mv} (best {best}, {} candidates, {} nodes, {} cutoffs)",
            candidates.len(),
            stats.nodes,
            stats.cutoffs
        );
    }
    chosen
}
