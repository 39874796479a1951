//! Short algebraic move notation.
//!
//! This is the per-move text used for logging and for recorded puzzle move
//! lists. Examples: "e4", "Nf3", "exd5", "O-O", "e8=Q", "exd6 e.p."
//!
//! # Examples
//! ```
//! use chess_core::board::{move_to_san, Board};
//!
//! let board = Board::new();
//! let mv = board.parse_san("Nf3").unwrap();
//! let moving = board.piece_at(mv.from()).unwrap();
//! assert_eq!(move_to_san(mv.from(), mv.to(), moving, None), "Nf3");
//! ```

use super::error::SanError;
use super::movegen::is_castling_shape;
use super::state::Occupant;
use super::{file_to_index, rank_to_index, Board, Color, Move, Piece, Square};

/// Format a move in short algebraic notation.
///
/// `moving` is the piece as it stood on `from`; `captured` is whatever stood
/// on `to` before the move. A promotion is always written as `=Q`, whichever
/// piece was finally chosen. Check markers are never appended. A move with an
/// off-board endpoint is written as `0000`.
#[must_use]
pub fn move_to_san(from: Square, to: Square, moving: (Color, Piece), captured: Occupant) -> String {
    let (color, piece) = moving;
    let mv = Move::new(from, to);
    if !mv.is_valid() {
        return mv.to_string();
    }

    if piece == Piece::King && is_castling_shape(mv) {
        return if mv.file_delta() > 0 { "O-O" } else { "O-O-O" }.to_string();
    }
    if piece == Piece::Pawn && to.rank() == color.pawn_promotion_rank() {
        return format!("{to}=Q");
    }

    let mut san = String::new();
    if piece != Piece::Pawn {
        san.push(piece.to_char().to_ascii_uppercase());
    }

    let en_passant = piece == Piece::Pawn
        && mv.file_delta().abs() == 1
        && mv.rank_delta().abs() == 1
        && captured.is_none();
    let capture = en_passant || matches!(captured, Some((c, _)) if c != color);
    if capture {
        if piece == Piece::Pawn {
            san.push((b'a' + from.file() as u8) as char);
        }
        san.push('x');
    }

    san.push_str(&to.to_string());
    if en_passant {
        san.push_str(" e.p.");
    }
    san
}

impl Board {
    /// Resolve a move in short algebraic notation for the side to move.
    ///
    /// Check markers (`+`, `#`), the ` e.p.` suffix and a promotion tag
    /// (`=X`) are accepted and ignored. Candidate origins are scanned rank by
    /// rank, from rank 8 downward for Black and from rank 1 upward for White,
    /// and the first one with a legal move to the destination wins.
    pub fn parse_san(&self, san: &str) -> Result<Move, SanError> {
        let text = san.trim().trim_end_matches(['+', '#']);
        let text = text.strip_suffix("e.p.").map_or(text, str::trim_end);
        if text.is_empty() {
            return Err(SanError::Empty);
        }

        let color = self.side_to_move;
        match text {
            "O-O" | "0-0" => return self.castling_move(color, true, san),
            "O-O-O" | "0-0-0" => return self.castling_move(color, false, san),
            _ => {}
        }

        let body = text.split_once('=').map_or(text, |(head, _)| head);
        let chars: Vec<char> = body.chars().collect();
        if chars.len() < 2 {
            return Err(SanError::InvalidSquare {
                notation: body.to_string(),
            });
        }

        let dest = parse_destination(&chars[chars.len() - 2..]).ok_or_else(|| {
            SanError::InvalidSquare {
                notation: body.to_string(),
            }
        })?;

        let (piece, info_start) = if chars.len() > 2 && chars[0].is_ascii_uppercase() {
            let piece = match chars[0] {
                'P' | 'N' | 'B' | 'R' | 'Q' | 'K' => Piece::from_char(chars[0]),
                _ => None,
            }
            .ok_or(SanError::InvalidPiece { char: chars[0] })?;
            (piece, 1)
        } else {
            (Piece::Pawn, 0)
        };

        let info_end = chars
            .iter()
            .position(|&c| c == 'x')
            .unwrap_or(chars.len() - 2);
        let (mut from_file, mut from_rank) = (None, None);
        if chars.len() > 2 && info_end > info_start {
            let info = &chars[info_start..info_end];
            from_file = info.first().copied().and_then(file_to_index);
            from_rank = info.last().copied().and_then(rank_to_index);
        }

        self.scan_origins(color)
            .filter(|&sq| self.piece_at(sq) == Some((color, piece)))
            .filter(|sq| from_file.map_or(true, |f| sq.file() == f))
            .filter(|sq| from_rank.map_or(true, |r| sq.rank() == r))
            .find(|&sq| self.validate_move(sq, dest))
            .map(|sq| Move::new(sq, dest))
            .ok_or_else(|| SanError::NoMatchingMove {
                san: san.trim().to_string(),
            })
    }

    /// Origin squares in the order notation is resolved: Black from rank 8
    /// down, White from rank 1 up, a-file first within a rank.
    fn scan_origins(&self, color: Color) -> impl Iterator<Item = Square> {
        let ranks: Vec<i8> = match color {
            Color::White => (0..8).collect(),
            Color::Black => (0..8).rev().collect(),
        };
        ranks
            .into_iter()
            .flat_map(|rank| (0..8).map(move |file| Square::new(file, rank)))
    }

    fn castling_move(&self, color: Color, kingside: bool, san: &str) -> Result<Move, SanError> {
        let rank = color.back_rank();
        let mv = Move::new(
            Square::new(4, rank),
            Square::new(if kingside { 6 } else { 2 }, rank),
        );
        if self.validate_move(mv.from(), mv.to()) {
            Ok(mv)
        } else {
            Err(SanError::NoMatchingMove {
                san: san.trim().to_string(),
            })
        }
    }
}

fn parse_destination(chars: &[char]) -> Option<Square> {
    let file = file_to_index(chars[0])?;
    let rank = rank_to_index(chars[1])?;
    Some(Square::new(file, rank))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_push() {
        let board = Board::new();
        let mv = board.parse_san("e4").unwrap();
        assert_eq!(mv, Move::new(sq("e2"), sq("e4")));
        assert_eq!(
            move_to_san(mv.from(), mv.to(), (Color::White, Piece::Pawn), None),
            "e4"
        );
    }

    #[test]
    fn test_knight_move() {
        let board = Board::new();
        let mv = board.parse_san("Nf3").unwrap();
        assert_eq!(mv, Move::new(sq("g1"), sq("f3")));
        assert_eq!(
            move_to_san(mv.from(), mv.to(), (Color::White, Piece::Knight), None),
            "Nf3"
        );
    }

    #[test]
    fn test_check_marker_ignored() {
        let board = Board::try_from_layout("4k3/8/8/8/8/8/8/4K2R w").unwrap();
        let mv = board.parse_san("Rh8+").unwrap();
        assert_eq!(mv, Move::new(sq("h1"), sq("h8")));
    }

    #[test]
    fn test_pawn_capture_notation() {
        let board =
            Board::try_from_layout("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w").unwrap();
        let mv = board.parse_san("exd5").unwrap();
        assert_eq!(mv, Move::new(sq("e4"), sq("d5")));
        let text = move_to_san(
            mv.from(),
            mv.to(),
            (Color::White, Piece::Pawn),
            board.piece_at(mv.to()),
        );
        assert_eq!(text, "exd5");
    }

    #[test]
    fn test_en_passant_notation() {
        let text = move_to_san(sq("e5"), sq("d6"), (Color::White, Piece::Pawn), None);
        assert_eq!(text, "exd6 e.p.");
    }

    #[test]
    fn test_en_passant_suffix_parses() {
        let mut board = Board::try_from_layout("4k3/8/8/3pP3/8/8/8/4K3 w").unwrap();
        board.en_passant_target = Some(sq("d6"));
        let mv = board.parse_san("exd6 e.p.").unwrap();
        assert_eq!(mv, Move::new(sq("e5"), sq("d6")));
    }

    #[test]
    fn test_off_board_endpoints() {
        let pawn = (Color::White, Piece::Pawn);
        assert_eq!(move_to_san(Square::NONE, sq("a1"), pawn, None), "0000");
        assert_eq!(move_to_san(sq("e2"), Square::new(8, 3), pawn, None), "0000");
    }

    #[test]
    fn test_promotion_always_queen() {
        let text = move_to_san(sq("a7"), sq("a8"), (Color::White, Piece::Pawn), None);
        assert_eq!(text, "a8=Q");
        let capture = move_to_san(
            sq("b2"),
            sq("a1"),
            (Color::Black, Piece::Pawn),
            Some((Color::White, Piece::Rook)),
        );
        assert_eq!(capture, "a1=Q");
    }

    #[test]
    fn test_promotion_tag_stripped_on_parse() {
        let board = Board::try_from_layout("8/P7/8/8/8/8/8/K1k5 w").unwrap();
        let mv = board.parse_san("a8=N").unwrap();
        assert_eq!(mv, Move::new(sq("a7"), sq("a8")));
    }

    #[test]
    fn test_castling_notation() {
        let text = move_to_san(sq("e1"), sq("g1"), (Color::White, Piece::King), None);
        assert_eq!(text, "O-O");
        let text = move_to_san(sq("e8"), sq("c8"), (Color::Black, Piece::King), None);
        assert_eq!(text, "O-O-O");
    }

    #[test]
    fn test_castling_parse_is_relative_to_side() {
        let board = Board::try_from_layout("r3k2r/8/8/8/8/8/8/R3K2R b").unwrap();
        assert_eq!(
            board.parse_san("O-O-O").unwrap(),
            Move::new(sq("e8"), sq("c8"))
        );
        assert_eq!(board.parse_san("0-0").unwrap(), Move::new(sq("e8"), sq("g8")));
    }

    #[test]
    fn test_illegal_castling_rejected() {
        let board = Board::new();
        assert!(matches!(
            board.parse_san("O-O"),
            Err(SanError::NoMatchingMove { .. })
        ));
    }

    #[test]
    fn test_file_disambiguation() {
        let board = Board::try_from_layout("3k4/8/8/8/R6R/8/8/4K3 w").unwrap();
        assert_eq!(board.parse_san("Rad4").unwrap().from(), sq("a4"));
        assert_eq!(board.parse_san("Rhd4").unwrap().from(), sq("h4"));
    }

    #[test]
    fn test_rank_disambiguation() {
        let board = Board::try_from_layout("R3k3/8/8/8/8/8/8/R3K3 w").unwrap();
        assert_eq!(board.parse_san("R1a4").unwrap().from(), sq("a1"));
        assert_eq!(board.parse_san("R8a4").unwrap().from(), sq("a8"));
    }

    #[test]
    fn test_ambiguous_white_prefers_low_rank() {
        let board = Board::try_from_layout("R3k3/8/8/8/8/8/8/R3K3 w").unwrap();
        assert_eq!(board.parse_san("Ra4").unwrap().from(), sq("a1"));
    }

    #[test]
    fn test_ambiguous_black_prefers_high_rank() {
        let board = Board::try_from_layout("r3K3/8/8/8/8/8/8/r3k3 b").unwrap();
        assert_eq!(board.parse_san("Ra4").unwrap().from(), sq("a8"));
    }

    #[test]
    fn test_errors() {
        let board = Board::new();
        assert_eq!(board.parse_san("  "), Err(SanError::Empty));
        assert!(matches!(
            board.parse_san("e"),
            Err(SanError::InvalidSquare { .. })
        ));
        assert!(matches!(
            board.parse_san("Nz9"),
            Err(SanError::InvalidSquare { .. })
        ));
        assert_eq!(
            board.parse_san("Xe4"),
            Err(SanError::InvalidPiece { char: 'X' })
        );
        assert!(matches!(
            board.parse_san("e5"),
            Err(SanError::NoMatchingMove { .. })
        ));
    }

    #[test]
    fn test_every_opening_move_resolves() {
        let board = Board::new();
        for mv in board.all_legal_moves(Color::White) {
            let moving = board.piece_at(mv.from()).unwrap();
            let text = move_to_san(mv.from(), mv.to(), moving, board.piece_at(mv.to()));
            assert_eq!(board.parse_san(&text).unwrap(), mv);
        }
    }
}
