//! UCI long-algebraic move strings (`e2e4`, `a7a8q`).
//!
//! Formatting lives on `Move::to_uci`; this module handles the reverse
//! direction, which needs a position to recover the moving piece, the
//! captured piece, and the castling/en-passant flags.

use crate::errors::{ChessError, ChessResult};
use crate::move_generation::move_generator::Engine;
use crate::moves::chess_move::Move;
use crate::position::chess_types::{PieceKind, Square};
use crate::position::position::Position;
use crate::utils::algebraic::algebraic_to_square;

/// Syntactic parts of a UCI move string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

pub fn parse_uci_text(text: &str) -> ChessResult<UciMove> {
    let invalid = || ChessError::InvalidMoveString(text.to_owned());

    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).ok_or_else(invalid)?;
    let to = algebraic_to_square(&text[2..4]).ok_or_else(invalid)?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(invalid)?),
    };

    if from == to {
        return Err(invalid());
    }

    Ok(UciMove { from, to, promotion })
}

/// Resolve `text` to the matching legal move in `position`.
pub fn parse_uci_move(position: &mut Position, text: &str) -> ChessResult<Move> {
    let wanted = parse_uci_text(text)?;

    Engine
        .generate_legal_moves(position)
        .iter()
        .copied()
        .find(|mv| {
            mv.from == wanted.from
                && mv.to == wanted.to
                && mv.promotion.map(|piece| piece.kind) == wanted.promotion
        })
        .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
