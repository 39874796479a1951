//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing layout
//! strings, including castling and en-passant state that the layout
//! notation does not carry.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(4, 0), Color::White, Piece::King)
//!     .piece(Square::new(4, 7), Color::Black, Piece::King)
//!     .piece(Square::new(0, 1), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.piece_at(Square::new(0, 1)), Some((Color::White, Piece::Pawn)));
//! ```

use super::{Board, CastlingState, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingState,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with nothing marked as moved.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingState::fresh(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder
                .pieces
                .extend(board.squares_of(color).map(|(sq, piece)| (sq, color, piece)));
        }
        builder
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Mark `color`'s king as having moved, ruling out castling on both sides.
    #[must_use]
    pub fn king_moved(mut self, color: Color) -> Self {
        self.castling.mark_king_moved(color);
        self
    }

    /// Mark one of `color`'s rooks as having moved.
    #[must_use]
    pub fn rook_moved(mut self, color: Color, kingside: bool) -> Self {
        self.castling.mark_rook_moved(color, kingside);
        self
    }

    /// Set the en passant target square (the square a capturing pawn lands on).
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the board. Check flags are computed from the final placement.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set_piece(square, Some((color, piece)));
        }
        board.side_to_move = self.side_to_move;
        board.castling = self.castling;
        board.en_passant_target = self.en_passant_target;
        board.refresh_check_flags();
        board
    }
}
