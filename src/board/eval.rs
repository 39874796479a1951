use super::{Board, Color, Piece, Square};

/// Pawn bonuses, indexed `[row][file]` with row 0 the far (promotion) rank
/// as seen by the pawn's owner.
const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 28, 28, 10, 5, 5],
    [0, 0, 0, 25, 25, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -25, -25, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// Positional bonus for `piece` of `color` on `sq`. Only pawns and knights
/// have tables.
#[inline]
fn position_bonus(color: Color, piece: Piece, sq: Square) -> i32 {
    let row = match color {
        Color::White => 7 - sq.rank(),
        Color::Black => sq.rank(),
    } as usize;
    let file = sq.file() as usize;
    match piece {
        Piece::Pawn => PAWN_TABLE[row][file],
        Piece::Knight => KNIGHT_TABLE[row][file],
        _ => 0,
    }
}

impl Board {
    /// Static score from `side`'s point of view: material plus table bonus
    /// for each of its pieces, minus the same for the opponent's.
    #[must_use]
    pub fn evaluate(&self, side: Color) -> i32 {
        Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|occ| (sq, occ)))
            .map(|(sq, (color, piece))| {
                let value = piece.value() + position_bonus(color, piece, sq);
                if color == side {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
