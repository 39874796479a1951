//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//! ```

pub use super::{
    move_to_san, Board, BoardBuilder, Color, Game, GameState, LayoutError, Move, Piece, SanError,
    SearchParams, Searcher, Square, SquareError,
};
