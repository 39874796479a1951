//! Chess rules engine and opponent search.
//!
//! [`Board`] is a plain position value: an 8x8 grid plus the flags the rules
//! depend on. All legality queries are `&self` methods. [`Game`] is the
//! caller-owned session on top of it that tracks selection, promotion and
//! single-ply undo. [`Searcher`] picks moves for the automated side.
//!
//! # Example
//! ```
//! use chess_core::board::{Color, Game, Square};
//!
//! let mut game = Game::new();
//! assert!(game.move_piece(Square::new(4, 1), Square::new(4, 3)));
//! assert_eq!(game.current_player(), Color::Black);
//! assert_eq!(game.board().en_passant_target(), Some(Square::new(4, 2)));
//! ```

mod builder;
mod check;
mod error;
mod eval;
mod game;
mod history;
mod layout;
mod line;
mod make_unmake;
mod movegen;
pub mod prelude;
mod san;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{LayoutError, SanError, SquareError};
pub use game::{Game, GameState, PendingPromotion};
pub use history::UndoRecord;
pub use line::{parse_move_line, split_move_list};
pub use san::move_to_san;
pub use state::{Board, Occupant};
pub use types::{CastlingState, Color, Move, Piece, Square};

pub use search::{
    choose_move_with, SearchParams, SearchStats, Searcher, INFINITY, MATE_SCORE,
};

pub(crate) use types::{file_to_index, rank_to_index, PROMOTION_CYCLE};
