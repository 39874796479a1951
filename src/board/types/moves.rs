//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A move as an ordered (from, to) pair of squares.
///
/// Special moves (castling, en passant, promotion) are not tagged; they are
/// recognised from the moving piece and the geometry when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// The invalid-move sentinel.
    pub const NONE: Move = Move {
        from: Square::NONE,
        to: Square::NONE,
    };

    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// A move is valid iff both endpoints are on the board.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }

    /// Signed file distance travelled.
    #[inline]
    pub(crate) const fn file_delta(self) -> i8 {
        self.to.file().wrapping_sub(self.from.file())
    }

    /// Signed rank distance travelled.
    #[inline]
    pub(crate) const fn rank_delta(self) -> i8 {
        self.to.rank().wrapping_sub(self.from.rank())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from, self.to)
    }
}
