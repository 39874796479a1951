//! Core chess types.
//!
//! This module contains the value types used throughout the crate:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (file, rank) coordinate with an off-board sentinel
//! - `Move` - (from, to) pair
//! - `CastlingState` - king/rook "has moved" flags

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingState;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_CYCLE;
pub(crate) use square::{file_to_index, rank_to_index};
