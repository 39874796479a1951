//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) fn file_to_index(file: char) -> Option<i8> {
    match file {
        'a'..='h' => Some((file as u8 - b'a') as i8),
        _ => None,
    }
}

pub(crate) fn rank_to_index(rank: char) -> Option<i8> {
    match rank {
        '1'..='8' => Some((rank as u8 - b'1') as i8),
        _ => None,
    }
}

/// A square on the chess board, addressed as (file, rank).
///
/// Coordinates are signed so that off-board positions coming from callers
/// (cursor arithmetic, sentinel values) are representable; every rule
/// function rejects squares for which [`Square::is_valid`] is false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    /// The "no square" sentinel, (-1, -1).
    pub const NONE: Square = Square { file: -1, rank: -1 };

    #[inline]
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    /// File index (0 = a-file). May be out of range for invalid squares.
    #[inline]
    #[must_use]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Rank index (0 = first rank). May be out of range for invalid squares.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    /// Square shifted by (df, dr); the result may be off-board.
    #[inline]
    #[must_use]
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Square {
            file: self.file.wrapping_add(df),
            rank: self.rank.wrapping_add(dr),
        }
    }

    /// Row/column indices into the 8x8 grid. Callers must check validity first.
    #[inline]
    pub(crate) const fn grid_index(self) -> (usize, usize) {
        (self.rank as usize, self.file as usize)
    }

    /// Iterate all 64 squares, rank 1 first, a-file to h-file within a rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square::new(file, rank)))
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::NONE
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "-");
        }
        write!(
            f,
            "{}{}",
            (self.file as u8 + b'a') as char,
            (self.rank as u8 + b'1') as char
        )
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    /// Build from a (file, rank) pair.
    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square::new(file as i8, rank as i8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = file_to_index(f).ok_or_else(invalid)?;
        let rank = rank_to_index(r).ok_or_else(invalid)?;
        Ok(Square::new(file, rank))
    }
}
