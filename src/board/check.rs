//! King attack detection and the trial-position check filter.

use super::movegen::en_passant_victim;
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Whether any opposing piece could move onto `color`'s king.
    ///
    /// Reuses the piece rules, so pawns attack only along their capture
    /// diagonals. A side without a king is never in check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        self.squares_of(color.opponent())
            .any(|(from, _)| self.is_move_valid(from, king))
    }

    /// Whether playing `from -> to` would leave the mover's own king attacked.
    ///
    /// Evaluated on a separate trial copy; `self` is never touched.
    #[must_use]
    pub fn would_put_king_in_check(&self, from: Square, to: Square) -> bool {
        let Some((color, _)) = self.piece_at(from) else {
            return false;
        };
        self.trial_position(from, to).is_king_in_check(color)
    }

    /// Copy of the board with the piece on `from` relocated to `to`.
    ///
    /// An en-passant victim is removed as well; castling rooks are not moved
    /// since only the king's own square matters for the filter.
    pub(crate) fn trial_position(&self, from: Square, to: Square) -> Board {
        let mut trial = self.clone();
        let mover = self.piece_at(from);
        if let Some((color, Piece::Pawn)) = mover {
            let mv = Move::new(from, to);
            if self.is_en_passant_capture(mv, color) {
                trial.set_piece(en_passant_victim(mv), None);
            }
        }
        trial.set_piece(to, mover);
        trial.set_piece(from, None);
        trial
    }
}
