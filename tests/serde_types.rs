#![cfg(feature = "serde")]

use chess_core::board::{CastlingState, Color, GameState, Move, Piece, SearchParams, Square};

#[test]
fn square_and_move_serialize() {
    let mv = Move::new(Square::new(4, 1), Square::new(4, 3));
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
    assert_eq!(back.to_string(), "e2e4");
}

#[test]
fn search_params_from_config_json() {
    let params: SearchParams = serde_json::from_str(r#"{"depth": 2, "tolerance": 40}"#).unwrap();
    assert_eq!(params.depth, 2);
    assert_eq!(params.tolerance, 40);
}

#[test]
fn enums_serialize_by_name() {
    assert_eq!(serde_json::to_string(&Piece::Knight).unwrap(), "\"Knight\"");
    assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"Black\"");
    assert_eq!(
        serde_json::to_string(&GameState::PromotionSelecting).unwrap(),
        "\"PromotionSelecting\""
    );
}

#[test]
fn castling_state_keeps_flags() {
    let mut state = CastlingState::fresh();
    state.mark_rook_moved(Color::White, true);
    let json = serde_json::to_string(&state).unwrap();
    let back: CastlingState = serde_json::from_str(&json).unwrap();
    assert!(!back.may_castle(Color::White, true));
    assert!(back.may_castle(Color::White, false));
}
