//! Caller-owned game session.
//!
//! Wraps a [`Board`] with the interactive state a front end needs: the
//! selected square and its cached destinations, the single-ply undo record
//! and the promotion sub-state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{LayoutError, SanError};
use super::history::UndoRecord;
use super::make_unmake::MoveKind;
use super::san::move_to_san;
use super::{Board, Color, Move, Piece, Square, PROMOTION_CYCLE};

/// Top-level input mode of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    #[default]
    NormalPlay,
    /// A pawn reached the last rank and is waiting for its replacement piece.
    PromotionSelecting,
}

/// A pawn waiting on the last rank for the player to pick its replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    pub square: Square,
    pub color: Color,
    /// Currently highlighted replacement piece.
    pub choice: Piece,
}

#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    selected: Option<Square>,
    valid_moves: Vec<Square>,
    last_move: Option<UndoRecord>,
    promotion: Option<PendingPromotion>,
}

impl Game {
    /// New session at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut board = board;
        board.refresh_check_flags();
        Game {
            board,
            selected: None,
            valid_moves: Vec::new(),
            last_move: None,
            promotion: None,
        }
    }

    /// New session from layout notation (piece placement and side to move).
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        Ok(Game::from_board(Board::try_from_layout(layout)?))
    }

    /// Back to the standard starting position with all session state cleared.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Replace the position from layout notation.
    ///
    /// The input is validated in full before anything changes; on error the
    /// session is left exactly as it was. On success castling flags start
    /// fresh and the en-passant target, undo record, selection and promotion
    /// state are cleared.
    pub fn load_layout(&mut self, layout: &str) -> Result<(), LayoutError> {
        let board = Board::try_from_layout(layout)?;
        log::debug!("loaded layout {layout}");
        *self = Game::from_board(board);
        Ok(())
    }

    #[must_use]
    pub fn to_layout_notation(&self) -> String {
        self.board.to_layout()
    }

    /// Resolve short algebraic notation against the current position.
    pub fn parse_move_notation(&self, san: &str) -> Result<Move, SanError> {
        self.board.parse_san(san)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.promotion.is_some() {
            GameState::PromotionSelecting
        } else {
            GameState::NormalPlay
        }
    }

    // ---- selection ---------------------------------------------------------

    /// Select one of the current player's pieces and cache its legal
    /// destinations. Rejected while a promotion is pending.
    pub fn select_piece(&mut self, sq: Square) -> bool {
        if self.promotion.is_some() || !sq.is_valid() {
            return false;
        }
        match self.board.piece_at(sq) {
            Some((color, _)) if color == self.current_player() => {
                self.selected = Some(sq);
                self.valid_moves = self.board.legal_destinations(sq);
                true
            }
            _ => false,
        }
    }

    pub fn deselect_piece(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }

    #[must_use]
    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations cached by the last successful [`Game::select_piece`].
    #[must_use]
    pub fn valid_moves(&self) -> &[Square] {
        &self.valid_moves
    }

    // ---- moves -------------------------------------------------------------

    /// Play `from -> to` for the current player.
    ///
    /// Returns `false` without touching any state if the move is illegal, the
    /// origin does not hold one of the current player's pieces, or a promotion
    /// is pending. A pawn reaching the last rank enters
    /// [`GameState::PromotionSelecting`] and the turn stays with the mover
    /// until [`Game::confirm_promotion`].
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        if self.promotion.is_some() || !from.is_valid() || !to.is_valid() {
            log::debug!("rejected move {from}{to}: not accepting moves");
            return false;
        }
        let player = self.current_player();
        if !matches!(self.board.piece_at(from), Some((c, _)) if c == player) {
            log::debug!("rejected move {from}{to}: no {player} piece on {from}");
            return false;
        }
        if !self.board.is_move_valid(from, to) || self.board.would_put_king_in_check(from, to) {
            log::debug!("rejected move {from}{to}: illegal");
            return false;
        }

        let mv = Move::new(from, to);
        let Some(record) = UndoRecord::snapshot(&self.board, mv) else {
            return false;
        };
        let Some(applied) = self.board.apply_placement(mv) else {
            return false;
        };
        self.last_move = Some(record);

        match applied.kind {
            MoveKind::Castle { kingside } => {
                log::debug!("{player} castled {}", if kingside { "short" } else { "long" });
            }
            MoveKind::EnPassant => log::debug!("en passant capture on {to}"),
            MoveKind::Promotion => {
                self.promotion = Some(PendingPromotion {
                    square: to,
                    color: player,
                    choice: Piece::Queen,
                });
                self.deselect_piece();
                log::debug!("{player} pawn on {to} awaiting promotion");
                return true;
            }
            MoveKind::Quiet | MoveKind::DoublePush => {}
        }

        self.board.finish_turn(mv, applied.moved);
        self.deselect_piece();
        self.log_position(mv, applied.moved, applied.captured);
        true
    }

    /// Feed a move (for example one chosen by the search) through
    /// [`Game::move_piece`].
    pub fn apply_move(&mut self, mv: Move) -> bool {
        self.move_piece(mv.from(), mv.to())
    }

    /// Full legality check without playing the move.
    #[must_use]
    pub fn validate_move(&self, from: Square, to: Square) -> bool {
        self.board.validate_move(from, to)
    }

    /// Take back the last move, including a move still waiting on its
    /// promotion choice.
    ///
    /// Only one ply is remembered: returns `false` and does nothing when
    /// there is no move to take back, including on a second consecutive call.
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.last_move.take() else {
            return false;
        };
        self.board.unmake(&record);
        self.promotion = None;
        self.deselect_piece();
        log::debug!("took back {}", record.last_move());
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.last_move.is_some()
    }

    /// The most recent move, while it can still be taken back.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move.as_ref().map(UndoRecord::last_move)
    }

    // ---- status ------------------------------------------------------------

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_king_in_check(color)
    }

    /// Check flag cached by the last completed move, for display.
    #[must_use]
    pub fn check_flag(&self, color: Color) -> bool {
        self.board.check_flag(color)
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.board.is_checkmate(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.board.is_stalemate(color)
    }

    /// Whether the current player has any legal move.
    #[must_use]
    pub fn has_valid_moves(&self) -> bool {
        self.board.has_any_legal_move(self.current_player())
    }

    // ---- promotion ---------------------------------------------------------

    #[must_use]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.promotion
    }

    #[must_use]
    pub fn promotion_square(&self) -> Option<Square> {
        self.promotion.map(|p| p.square)
    }

    #[must_use]
    pub fn promotion_color(&self) -> Option<Color> {
        self.promotion.map(|p| p.color)
    }

    #[must_use]
    pub fn promotion_choice(&self) -> Option<Piece> {
        self.promotion.map(|p| p.choice)
    }

    /// Move the highlighted promotion piece through Rook, Knight, Queen,
    /// Bishop, wrapping at either end. No effect outside promotion.
    pub fn navigate_promotion(&mut self, direction: i32) {
        let Some(pending) = self.promotion.as_mut() else {
            return;
        };
        let len = PROMOTION_CYCLE.len() as i32;
        let current = PROMOTION_CYCLE
            .iter()
            .position(|&p| p == pending.choice)
            .unwrap_or(0) as i32;
        let next = (current + direction.rem_euclid(len)).rem_euclid(len) as usize;
        pending.choice = PROMOTION_CYCLE[next];
    }

    /// Highlight a specific promotion piece. Returns `false` outside
    /// promotion or for a piece a pawn cannot become.
    pub fn set_promotion_choice(&mut self, piece: Piece) -> bool {
        match self.promotion.as_mut() {
            Some(pending) if PROMOTION_CYCLE.contains(&piece) => {
                pending.choice = piece;
                true
            }
            _ => false,
        }
    }

    /// Replace the waiting pawn with the highlighted piece and pass the turn.
    pub fn confirm_promotion(&mut self) -> bool {
        let Some(pending) = self.promotion.take() else {
            return false;
        };
        self.board
            .set_piece(pending.square, Some((pending.color, pending.choice)));
        log::debug!(
            "{} pawn on {} promoted to {:?}",
            pending.color,
            pending.square,
            pending.choice
        );

        let Some(record) = self.last_move.as_ref() else {
            self.board.switch_side();
            return true;
        };
        let (mv, captured) = (record.mv, record.captured);
        self.board.finish_turn(mv, (pending.color, Piece::Pawn));
        self.log_position(mv, (pending.color, Piece::Pawn), captured);
        true
    }

    fn log_position(&self, mv: Move, moved: (Color, Piece), captured: Option<(Color, Piece)>) {
        log::info!("layout: {}", self.board.to_layout());
        log::info!("move: {}", move_to_san(mv.from(), mv.to(), moved, captured));
    }
}
