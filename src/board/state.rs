use super::{CastlingState, Color, Piece, Square};

/// A grid cell: the occupying piece and its color, or `None` when empty.
pub type Occupant = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Position data: piece placement plus the flags the move rules depend on.
///
/// All rule queries take `&self`. Mutation happens only through
/// [`Board::play`] (search) and the [`Game`](super::Game) session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Indexed `[rank][file]`.
    pub(crate) grid: [[Occupant; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingState,
    pub(crate) en_passant_target: Option<Square>,
    /// Display cache of the last check evaluation, `[white, black]`.
    pub(crate) check_flags: [bool; 2],
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            board.set_piece(Square::new(file, 0), Some((Color::White, *piece)));
            board.set_piece(Square::new(file, 1), Some((Color::White, Piece::Pawn)));
            board.set_piece(Square::new(file, 6), Some((Color::Black, Piece::Pawn)));
            board.set_piece(Square::new(file, 7), Some((Color::Black, *piece)));
        }
        board
    }

    /// A board with no pieces, White to move and fresh castling flags.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingState::fresh(),
            en_passant_target: None,
            check_flags: [false; 2],
        }
    }

    /// Occupant of `sq`; off-board squares read as empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Occupant {
        if !sq.is_valid() {
            return None;
        }
        let (rank, file) = sq.grid_index();
        self.grid[rank][file]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place (or clear, with `None`) a square. Off-board writes are ignored.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, occupant: Occupant) {
        if !sq.is_valid() {
            return;
        }
        let (rank, file) = sq.grid_index();
        self.grid[rank][file] = occupant;
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling(&self) -> CastlingState {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Cached check flag from the last move; use `is_king_in_check` for the
    /// authoritative answer.
    #[inline]
    #[must_use]
    pub fn check_flag(&self, color: Color) -> bool {
        self.check_flags[color.index()]
    }

    pub(crate) fn switch_side(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    pub(crate) fn refresh_check_flags(&mut self) {
        for color in Color::BOTH {
            self.check_flags[color.index()] = self.is_king_in_check(color);
        }
    }

    /// Squares holding pieces of `color`, in scan order (rank 1 first).
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Location of `color`'s king, if it is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares_of(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
