use std::str::FromStr;

use super::error::LayoutError;
use super::state::Occupant;
use super::{Board, Color, Piece, Square};

/// Trailing fields written after the side to move. Castling rights, the
/// en-passant file and the move counters are not tracked in the layout.
const PLACEHOLDER_FIELDS: &str = "- - 0 1";

impl Board {
    /// Parse a position from board-layout notation.
    ///
    /// Only the placement and side-to-move fields are read; anything after
    /// them is ignored. The whole input is validated before a board is
    /// produced, so a failed parse never yields a half-filled position.
    /// Castling flags start fresh and there is no en-passant target.
    pub fn try_from_layout(layout: &str) -> Result<Self, LayoutError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(LayoutError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut grid: [[Occupant; 8]; 8] = [[None; 8]; 8];
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file < 8 {
                    grid[rank][file] = Some((color, piece));
                }
                file += 1;
            }
            if file != 8 {
                return Err(LayoutError::WrongFileCount { rank, files: file });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(LayoutError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut board = Board::empty();
        board.grid = grid;
        board.side_to_move = side_to_move;
        board.refresh_check_flags();
        Ok(board)
    }

    /// Write the position as board-layout notation: placement, side to move
    /// and the fixed `- - 0 1` trailer.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_layout_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        format!(
            "{} {} {}",
            rows.join("/"),
            self.side_to_move.layout_char(),
            PLACEHOLDER_FIELDS
        )
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_layout(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    #[test]
    fn test_start_position_export() {
        assert_eq!(Board::new().to_layout(), START);
    }

    #[test]
    fn test_round_trip_placement_and_side() {
        let layout = "r3k2r/ppp2ppp/2n5/3qp3/8/2N5/PPP2PPP/R3K2R b - - 0 1";
        let board = Board::try_from_layout(layout).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.to_layout(), layout);
    }

    #[test]
    fn test_trailing_fields_ignored() {
        let board =
            Board::try_from_layout("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(board.en_passant_target(), None);
        assert!(board.to_layout().ends_with(" b - - 0 1"));
    }

    #[test]
    fn test_loaded_castling_is_fresh() {
        let board = Board::try_from_layout("r3k2r/8/8/8/8/8/8/R3K2R w").unwrap();
        assert!(board.castling().may_castle(Color::White, true));
        assert!(board.castling().may_castle(Color::Black, false));
    }

    #[test]
    fn test_check_flags_recomputed() {
        let board = Board::try_from_layout("4k3/8/8/8/8/8/8/4K2r w").unwrap();
        assert!(board.check_flag(Color::White));
        assert!(!board.check_flag(Color::Black));
    }

    #[test]
    fn test_error_missing_side() {
        let result = Board::try_from_layout("8/8/8/8/8/8/8/8");
        assert_eq!(result, Err(LayoutError::TooFewParts { found: 1 }));
    }

    #[test]
    fn test_error_invalid_piece() {
        let result = Board::try_from_layout("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert_eq!(result, Err(LayoutError::InvalidPiece { char: 'x' }));
    }

    #[test]
    fn test_error_invalid_side() {
        let result = Board::try_from_layout("8/8/8/8/8/8/8/8 x");
        assert!(matches!(result, Err(LayoutError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_error_rank_count() {
        let result = Board::try_from_layout("8/8/8/8/8/8/8 w");
        assert_eq!(result, Err(LayoutError::WrongRankCount { found: 7 }));
    }

    #[test]
    fn test_error_file_count() {
        let long = Board::try_from_layout("9/8/8/8/8/8/8/8 w");
        assert_eq!(long, Err(LayoutError::WrongFileCount { rank: 7, files: 9 }));
        let short = Board::try_from_layout("8/8/8/8/8/8/8/7 w");
        assert_eq!(short, Err(LayoutError::WrongFileCount { rank: 0, files: 7 }));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START.parse().unwrap();
        assert_eq!(board, Board::new());
    }
}
