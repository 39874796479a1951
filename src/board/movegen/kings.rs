use super::super::{Board, Color, Move, Piece, Square};

/// File of the king's home square.
pub(crate) const KING_HOME_FILE: i8 = 4;

/// Corner square of the rook that castles toward `kingside`.
#[inline]
pub(crate) fn castling_rook_home(color: Color, kingside: bool) -> Square {
    Square::new(if kingside { 7 } else { 0 }, color.back_rank())
}

/// Square the castling rook lands on (the king's transit square).
#[inline]
pub(crate) fn castling_rook_target(color: Color, kingside: bool) -> Square {
    Square::new(if kingside { 5 } else { 3 }, color.back_rank())
}

/// A king move two files sideways is a castling attempt.
#[inline]
pub(crate) fn is_castling_shape(mv: Move) -> bool {
    mv.rank_delta() == 0 && mv.file_delta().abs() == 2
}

impl Board {
    pub(crate) fn king_move_valid(&self, mv: Move, color: Color) -> bool {
        let df = mv.file_delta().abs();
        let dr = mv.rank_delta().abs();
        if df <= 1 && dr <= 1 {
            return true;
        }
        is_castling_shape(mv) && self.castling_valid(mv, color)
    }

    /// Castling: king and rook unmoved and in place, nothing between them,
    /// king not in check and the transit square not attacked. Safety of the
    /// landing square is left to the check filter every move goes through.
    fn castling_valid(&self, mv: Move, color: Color) -> bool {
        let home = Square::new(KING_HOME_FILE, color.back_rank());
        if mv.from() != home || mv.to().rank() != home.rank() {
            return false;
        }

        let kingside = mv.file_delta() > 0;
        if !self.castling.may_castle(color, kingside) {
            return false;
        }

        let rook_home = castling_rook_home(color, kingside);
        if self.piece_at(rook_home) != Some((color, Piece::Rook)) {
            return false;
        }
        // Also guarantees the destination is empty, so a castle never
        // "attacks" anything and check detection cannot recurse through here.
        if !self.is_path_clear(home, rook_home) {
            return false;
        }

        if self.is_king_in_check(color) {
            return false;
        }
        let transit = castling_rook_target(color, kingside);
        !self.would_put_king_in_check(home, transit)
    }
}
