//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Per-piece movement rules and the check filter
//! - `castling.rs` - Each castling condition on its own
//! - `en_passant.rs` - Capture, expiry and discovered checks
//! - `make_undo.rs` - Move application and single-ply undo
//! - `promotion.rs` - Promotion sub-state
//! - `session.rs` - Selection, turn order and game-end status
//! - `search.rs` - Move selection
//! - `proptest.rs` - Property-based tests

mod promotion;

use crate::board::{Board, Square};

/// Square from algebraic text, for readable test positions.
pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

pub(super) fn layout(text: &str) -> Board {
    Board::try_from_layout(text).unwrap()
}
