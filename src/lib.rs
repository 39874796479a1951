pub mod board;

pub use board::{Board, Color, Game, Move, Piece, Searcher, Square};
