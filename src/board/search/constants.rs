//! Search constants.

/// Score of a side that has been checkmated, from the winner's view.
pub const MATE_SCORE: i32 = 99_999;

/// Initial alpha-beta window bound; wider than any reachable score.
pub const INFINITY: i32 = 1_000_000;
