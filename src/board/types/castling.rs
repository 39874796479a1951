//! Castling state: which kings and rooks have left their home squares.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const WHITE_KING_MOVED: u8 = 1 << 0;
pub(crate) const BLACK_KING_MOVED: u8 = 1 << 1;
pub(crate) const WHITE_ROOK_A_MOVED: u8 = 1 << 2;
pub(crate) const WHITE_ROOK_H_MOVED: u8 = 1 << 3;
pub(crate) const BLACK_ROOK_A_MOVED: u8 = 1 << 4;
pub(crate) const BLACK_ROOK_H_MOVED: u8 = 1 << 5;

/// "Has moved" flags represented as a bitmask.
///
/// A cleared bit means the piece is still eligible for castling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingState(u8);

impl CastlingState {
    /// Nothing has moved yet: every castle is still available.
    #[must_use]
    pub const fn fresh() -> Self {
        CastlingState(0)
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::rook_bit(color, kingside) != 0
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::rook_bit(color, kingside);
    }

    /// Flag-level castling eligibility; board conditions are checked separately.
    #[inline]
    #[must_use]
    pub const fn may_castle(self, color: Color, kingside: bool) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, kingside)
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    const fn rook_bit(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, false) => WHITE_ROOK_A_MOVED,
            (Color::White, true) => WHITE_ROOK_H_MOVED,
            (Color::Black, false) => BLACK_ROOK_A_MOVED,
            (Color::Black, true) => BLACK_ROOK_H_MOVED,
        }
    }
}
