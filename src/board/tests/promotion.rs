//! Promotion sub-state.

use super::sq;
use crate::board::{Color, Game, GameState, Piece};

const WHITE_PAWN_ON_SEVENTH: &str = "4k3/P7/8/8/8/8/8/4K3 w";

fn pending_promotion() -> Game {
    let mut game = Game::from_layout(WHITE_PAWN_ON_SEVENTH).unwrap();
    assert!(game.move_piece(sq("a7"), sq("a8")));
    game
}

#[test]
fn test_reaching_last_rank_enters_selection() {
    let game = pending_promotion();
    assert_eq!(game.state(), GameState::PromotionSelecting);
    assert_eq!(game.promotion_square(), Some(sq("a8")));
    assert_eq!(game.promotion_color(), Some(Color::White));
    assert_eq!(game.promotion_choice(), Some(Piece::Queen));
    assert_eq!(game.current_player(), Color::White);
    assert_eq!(
        game.board().piece_at(sq("a8")),
        Some((Color::White, Piece::Pawn))
    );
}

#[test]
fn test_input_rejected_while_selecting() {
    let mut game = pending_promotion();
    assert!(!game.select_piece(sq("e1")));
    assert!(!game.move_piece(sq("e1"), sq("e2")));
    assert_eq!(game.state(), GameState::PromotionSelecting);
}

#[test]
fn test_navigation_cycles_with_wraparound() {
    let mut game = pending_promotion();
    game.navigate_promotion(1);
    assert_eq!(game.promotion_choice(), Some(Piece::Bishop));
    game.navigate_promotion(1);
    assert_eq!(game.promotion_choice(), Some(Piece::Rook));
    game.navigate_promotion(-1);
    assert_eq!(game.promotion_choice(), Some(Piece::Bishop));
    game.navigate_promotion(-2);
    assert_eq!(game.promotion_choice(), Some(Piece::Knight));
    game.navigate_promotion(5);
    assert_eq!(game.promotion_choice(), Some(Piece::Queen));
}

#[test]
fn test_navigation_accepts_extreme_steps() {
    let mut game = pending_promotion();
    game.navigate_promotion(i32::MAX);
    assert_eq!(game.promotion_choice(), Some(Piece::Knight));
    game.navigate_promotion(i32::MIN);
    assert_eq!(game.promotion_choice(), Some(Piece::Knight));
    game.navigate_promotion(i32::MIN + 1);
    assert_eq!(game.promotion_choice(), Some(Piece::Queen));
}

#[test]
fn test_navigation_outside_selection_does_nothing() {
    let mut game = Game::new();
    game.navigate_promotion(1);
    assert_eq!(game.promotion_choice(), None);
    assert!(!game.set_promotion_choice(Piece::Rook));
    assert!(!game.confirm_promotion());
}

#[test]
fn test_confirm_places_chosen_piece() {
    let mut game = pending_promotion();
    assert!(game.set_promotion_choice(Piece::Knight));
    assert!(game.confirm_promotion());
    assert_eq!(game.state(), GameState::NormalPlay);
    assert_eq!(
        game.board().piece_at(sq("a8")),
        Some((Color::White, Piece::Knight))
    );
    assert_eq!(game.current_player(), Color::Black);
    assert!(!game.check_flag(Color::Black));
}

#[test]
fn test_confirm_queen_gives_check() {
    let mut game = pending_promotion();
    assert!(game.confirm_promotion());
    assert!(game.check_flag(Color::Black));
    assert!(game.is_in_check(Color::Black));
}

#[test]
fn test_pawn_and_king_are_not_choices() {
    let mut game = pending_promotion();
    assert!(!game.set_promotion_choice(Piece::King));
    assert!(!game.set_promotion_choice(Piece::Pawn));
    assert_eq!(game.promotion_choice(), Some(Piece::Queen));
}

#[test]
fn test_undo_during_selection_restores_pawn() {
    let mut game = pending_promotion();
    assert!(game.undo_move());
    assert_eq!(game.state(), GameState::NormalPlay);
    assert_eq!(
        game.board().piece_at(sq("a7")),
        Some((Color::White, Piece::Pawn))
    );
    assert!(game.board().is_empty(sq("a8")));
}

#[test]
fn test_undo_after_confirm_restores_pawn() {
    let mut game = pending_promotion();
    game.navigate_promotion(-1);
    assert!(game.confirm_promotion());
    assert!(game.undo_move());
    assert_eq!(
        game.board().piece_at(sq("a7")),
        Some((Color::White, Piece::Pawn))
    );
    assert!(game.board().is_empty(sq("a8")));
    assert_eq!(game.current_player(), Color::White);
}

#[test]
fn test_capture_promotion_for_black() {
    let mut game = Game::from_layout("4k3/8/8/8/8/8/1p6/R3K3 b").unwrap();
    assert!(game.move_piece(sq("b2"), sq("a1")));
    assert_eq!(game.promotion_color(), Some(Color::Black));
    assert!(game.set_promotion_choice(Piece::Rook));
    assert!(game.confirm_promotion());
    assert_eq!(
        game.board().piece_at(sq("a1")),
        Some((Color::Black, Piece::Rook))
    );
    assert!(game.check_flag(Color::White));
    assert!(game.undo_move());
    assert_eq!(
        game.board().piece_at(sq("a1")),
        Some((Color::White, Piece::Rook))
    );
}
