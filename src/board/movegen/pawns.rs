use super::super::{Board, Color, Move, Piece, Square};

impl Board {
    pub(crate) fn pawn_move_valid(&self, mv: Move, color: Color) -> bool {
        let dir = color.pawn_direction();
        let df = mv.file_delta();
        let dr = mv.rank_delta();
        let target_empty = self.is_empty(mv.to());

        if df == 0 {
            if dr == dir {
                return target_empty;
            }
            if dr == 2 * dir && mv.from().rank() == color.pawn_start_rank() {
                return target_empty && self.is_empty(mv.from().offset(0, dir));
            }
            return false;
        }

        if df.abs() == 1 && dr == dir {
            // Own pieces on the target were already rejected by the caller.
            return !target_empty || self.is_en_passant_capture(mv, color);
        }

        false
    }

    /// A diagonal step onto the empty en-passant target with an enemy pawn
    /// directly beside the mover (one rank behind the destination).
    pub(crate) fn is_en_passant_capture(&self, mv: Move, color: Color) -> bool {
        if self.en_passant_target != Some(mv.to()) || !self.is_empty(mv.to()) {
            return false;
        }
        if mv.file_delta().abs() != 1 || mv.rank_delta() != color.pawn_direction() {
            return false;
        }
        matches!(
            self.piece_at(en_passant_victim(mv)),
            Some((c, Piece::Pawn)) if c != color
        )
    }
}

/// Square of the pawn removed by an en-passant capture.
#[inline]
pub(crate) fn en_passant_victim(mv: Move) -> Square {
    Square::new(mv.to().file(), mv.from().rank())
}
