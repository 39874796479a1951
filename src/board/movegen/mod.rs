//! Legality engine: move rules per piece family plus the check filter
//! applied on top of them.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::{castling_rook_home, castling_rook_target, is_castling_shape};
pub(crate) use pawns::en_passant_victim;

use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Piece-movement legality, ignoring whether the mover's king ends up in
    /// check.
    ///
    /// Rejects off-board endpoints, an empty origin and a target holding a
    /// piece of the mover's own color before dispatching on the piece type.
    #[must_use]
    pub fn is_move_valid(&self, from: Square, to: Square) -> bool {
        if !from.is_valid() || !to.is_valid() {
            return false;
        }
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        if matches!(self.piece_at(to), Some((c, _)) if c == color) {
            return false;
        }

        let mv = Move::new(from, to);
        match piece {
            Piece::Pawn => self.pawn_move_valid(mv, color),
            Piece::Knight => self.knight_move_valid(mv),
            Piece::Bishop | Piece::Rook | Piece::Queen => self.slider_move_valid(mv, piece),
            Piece::King => self.king_move_valid(mv, color),
        }
    }

    /// Fully legal: valid piece movement that keeps the mover's king safe.
    #[must_use]
    pub fn validate_move(&self, from: Square, to: Square) -> bool {
        self.is_move_valid(from, to) && !self.would_put_king_in_check(from, to)
    }

    /// Legal destination squares for the piece on `from`, in scan order.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.is_empty(from) {
            return Vec::new();
        }
        Square::all()
            .filter(|&to| self.validate_move(from, to))
            .collect()
    }

    /// Every legal move for `color`, grouped by origin square in scan order.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.squares_of(color)
            .flat_map(|(from, _)| {
                self.legal_destinations(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Whether `color` has at least one legal move. Stops at the first one.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.squares_of(color)
            .any(|(from, _)| Square::all().any(|to| self.validate_move(from, to)))
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_any_legal_move(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_any_legal_move(color)
    }
}
