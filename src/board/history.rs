use super::state::Occupant;
use super::{Board, CastlingState, Color, Move, Piece, Square};

/// Everything needed to take back the most recent move.
///
/// Only one of these is kept, so undo reaches back a single ply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub(crate) mv: Move,
    pub(crate) moved: (Color, Piece),
    pub(crate) captured: Occupant,
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_castling: CastlingState,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_check_flags: [bool; 2],
}

impl UndoRecord {
    /// Snapshot `board` as it is right before `mv` is applied.
    pub(crate) fn snapshot(board: &Board, mv: Move) -> Option<Self> {
        let moved = board.piece_at(mv.from())?;
        Some(UndoRecord {
            mv,
            moved,
            captured: board.piece_at(mv.to()),
            previous_side_to_move: board.side_to_move,
            previous_castling: board.castling,
            previous_en_passant_target: board.en_passant_target,
            previous_check_flags: board.check_flags,
        })
    }

    /// The move this record takes back.
    #[must_use]
    pub fn last_move(&self) -> Move {
        self.mv
    }
}
