//! Board-level move application and reversal.

use super::history::UndoRecord;
use super::movegen::{castling_rook_home, castling_rook_target, en_passant_victim, is_castling_shape};
use super::state::Occupant;
use super::{Board, Color, Move, Piece, Square};

/// Side effect a move had beyond relocating the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveKind {
    Quiet,
    DoublePush,
    Castle { kingside: bool },
    EnPassant,
    Promotion,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Applied {
    pub(crate) moved: (Color, Piece),
    pub(crate) captured: Occupant,
    pub(crate) kind: MoveKind,
}

impl Board {
    /// Relocate pieces for an already validated move and update the castling
    /// and en-passant state. Does not switch sides and does not promote.
    pub(crate) fn apply_placement(&mut self, mv: Move) -> Option<Applied> {
        let (color, piece) = self.piece_at(mv.from())?;
        let captured = self.piece_at(mv.to());
        let en_passant = piece == Piece::Pawn && self.is_en_passant_capture(mv, color);

        self.set_piece(mv.to(), Some((color, piece)));
        self.set_piece(mv.from(), None);
        self.en_passant_target = None;

        if let Some((victim_color, Piece::Rook)) = captured {
            self.mark_rook_left_home(victim_color, mv.to());
        }

        let mut kind = MoveKind::Quiet;
        match piece {
            Piece::King => {
                self.castling.mark_king_moved(color);
                if is_castling_shape(mv) {
                    let kingside = mv.file_delta() > 0;
                    let rook_home = castling_rook_home(color, kingside);
                    let rook = self.piece_at(rook_home);
                    self.set_piece(castling_rook_target(color, kingside), rook);
                    self.set_piece(rook_home, None);
                    self.castling.mark_rook_moved(color, kingside);
                    kind = MoveKind::Castle { kingside };
                }
            }
            Piece::Pawn => {
                if mv.rank_delta().abs() == 2 {
                    self.en_passant_target = Some(mv.from().offset(0, color.pawn_direction()));
                    kind = MoveKind::DoublePush;
                } else if en_passant {
                    self.set_piece(en_passant_victim(mv), None);
                    kind = MoveKind::EnPassant;
                }
                if mv.to().rank() == color.pawn_promotion_rank() {
                    kind = MoveKind::Promotion;
                }
            }
            _ => {}
        }

        Some(Applied {
            moved: (color, piece),
            captured,
            kind,
        })
    }

    /// Close out a move: record rook departures, refresh the check flags and
    /// hand the turn to the opponent of the mover.
    pub(crate) fn finish_turn(&mut self, mv: Move, moved: (Color, Piece)) {
        let (color, piece) = moved;
        if piece == Piece::Rook {
            self.mark_rook_left_home(color, mv.from());
        }

        let opponent = color.opponent();
        self.check_flags[opponent.index()] = self.is_king_in_check(opponent);
        self.check_flags[color.index()] = false;
        self.side_to_move = opponent;
    }

    fn mark_rook_left_home(&mut self, color: Color, sq: Square) {
        for kingside in [false, true] {
            if sq == castling_rook_home(color, kingside) {
                self.castling.mark_rook_moved(color, kingside);
            }
        }
    }

    /// Play a legal move for the side to move, promoting to a queen when a
    /// pawn reaches the last rank.
    ///
    /// Returns `false` and leaves the board untouched if the move is illegal
    /// or moves the wrong side's piece.
    pub fn play(&mut self, mv: Move) -> bool {
        if !mv.is_valid() || !self.validate_move(mv.from(), mv.to()) {
            return false;
        }
        if !matches!(self.piece_at(mv.from()), Some((c, _)) if c == self.side_to_move) {
            return false;
        }
        let Some(applied) = self.apply_placement(mv) else {
            return false;
        };
        if applied.kind == MoveKind::Promotion {
            self.set_piece(mv.to(), Some((applied.moved.0, Piece::Queen)));
        }
        self.finish_turn(mv, applied.moved);
        true
    }

    /// Reverse the move described by `record`.
    ///
    /// Castling rook relocation and en-passant removal are re-derived from
    /// the moved piece and the move geometry.
    pub(crate) fn unmake(&mut self, record: &UndoRecord) {
        let mv = record.mv;
        let (color, piece) = record.moved;

        self.set_piece(mv.from(), Some(record.moved));
        self.set_piece(mv.to(), record.captured);

        match piece {
            Piece::King if is_castling_shape(mv) => {
                let kingside = mv.file_delta() > 0;
                let rook_target = castling_rook_target(color, kingside);
                let rook = self.piece_at(rook_target);
                self.set_piece(castling_rook_home(color, kingside), rook);
                self.set_piece(rook_target, None);
            }
            Piece::Pawn if mv.file_delta() != 0 && record.captured.is_none() => {
                self.set_piece(
                    en_passant_victim(mv),
                    Some((color.opponent(), Piece::Pawn)),
                );
            }
            _ => {}
        }

        self.side_to_move = record.previous_side_to_move;
        self.castling = record.previous_castling;
        self.en_passant_target = record.previous_en_passant_target;
        self.check_flags = record.previous_check_flags;
    }
}
