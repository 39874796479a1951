//! Recorded move lists such as `1. e4 e5 2. Nf3 Nc6 3. Bb5`.

use super::error::SanError;
use super::{Game, GameState, Move, Piece};

/// Split a move list into move tokens, dropping move numbers (`1.`,
/// `12...`, the `1.` prefix of `1.e4`), result markers and the detached
/// ` e.p.` suffix of an en-passant capture.
#[must_use]
pub fn split_move_list(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter_map(strip_move_number)
        .filter(|token| !matches!(*token, "1-0" | "0-1" | "1/2-1/2" | "*" | "e.p."))
        .collect()
}

fn strip_move_number(token: &str) -> Option<&str> {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return Some(token);
    }
    let rest = token[digits..].trim_start_matches('.');
    if rest.len() == token.len() - digits {
        // No dots after the digits, so not a move number.
        return Some(token);
    }
    (!rest.is_empty()).then_some(rest)
}

/// Resolve every move of a recorded list, starting from `game`'s position.
///
/// Moves are played on a scratch copy so each one is read against the
/// position it was recorded in; `game` itself is not touched. A promotion is
/// completed with the piece named by its `=X` tag, or a queen.
pub fn parse_move_line(game: &Game, text: &str) -> Result<Vec<Move>, SanError> {
    let mut scratch = game.clone();
    let mut moves = Vec::new();

    for token in split_move_list(text) {
        let mv = scratch.parse_move_notation(token)?;
        if !scratch.apply_move(mv) {
            return Err(SanError::NoMatchingMove {
                san: token.to_string(),
            });
        }
        if scratch.state() == GameState::PromotionSelecting {
            let choice = promotion_tag(token).unwrap_or(Piece::Queen);
            scratch.set_promotion_choice(choice);
            scratch.confirm_promotion();
        }
        moves.push(mv);
    }

    log::debug!("parsed {} moves from move list", moves.len());
    Ok(moves)
}

fn promotion_tag(token: &str) -> Option<Piece> {
    let (_, tag) = token.split_once('=')?;
    tag.chars().next().and_then(Piece::from_char)
}
