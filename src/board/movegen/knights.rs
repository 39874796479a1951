use super::super::{Board, Move};

impl Board {
    /// Knight geometry: (|df|, |dr|) is (1, 2) or (2, 1). Knights jump, so
    /// nothing in between matters.
    pub(crate) fn knight_move_valid(&self, mv: Move) -> bool {
        let df = mv.file_delta().abs();
        let dr = mv.rank_delta().abs();
        (df == 1 && dr == 2) || (df == 2 && dr == 1)
    }
}
