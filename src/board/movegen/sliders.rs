use super::super::{Board, Move, Piece, Square};

impl Board {
    /// True iff every square strictly between `from` and `to` is empty.
    ///
    /// Only meaningful for straight or equal-magnitude diagonal lines; other
    /// shapes are reported clear, so callers gate this behind a shape check.
    /// An off-board endpoint never has a clear path.
    #[must_use]
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        if !from.is_valid() || !to.is_valid() {
            return false;
        }
        let df = to.file() - from.file();
        let dr = to.rank() - from.rank();
        if !(df == 0 || dr == 0 || df.abs() == dr.abs()) {
            return true;
        }

        let (step_f, step_r) = (df.signum(), dr.signum());
        let mut sq = from.offset(step_f, step_r);
        while sq != to && sq.is_valid() {
            if !self.is_empty(sq) {
                return false;
            }
            sq = sq.offset(step_f, step_r);
        }
        true
    }

    pub(crate) fn slider_move_valid(&self, mv: Move, piece: Piece) -> bool {
        let df = mv.file_delta().abs();
        let dr = mv.rank_delta().abs();
        let straight = df == 0 || dr == 0;
        let diagonal = df == dr;

        let shape_ok = match piece {
            Piece::Bishop => diagonal,
            Piece::Rook => straight,
            Piece::Queen => straight || diagonal,
            _ => false,
        };
        shape_ok && self.is_path_clear(mv.from(), mv.to())
    }
}
