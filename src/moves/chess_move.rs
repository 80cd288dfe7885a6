//! Move value type and its UCI spelling.

use std::fmt;

use crate::position::chess_types::{Piece, PieceKind, Square};
use crate::utils::algebraic::square_name;

/// A fully described move.
///
/// `captured` is the piece standing on `to` before the move, or for an
/// en-passant capture the pawn one rank behind `to`. `promotion` carries the
/// mover's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub promotion: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
}

impl Move {
    #[inline]
    pub const fn quiet(piece: Piece, from: Square, to: Square) -> Self {
        Self {
            piece,
            from,
            to,
            captured: None,
            promotion: None,
            is_en_passant: false,
            is_castling: false,
        }
    }

    #[inline]
    pub const fn capture(piece: Piece, from: Square, to: Square, captured: Piece) -> Self {
        Self {
            captured: Some(captured),
            ..Self::quiet(piece, from, to)
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Square the captured piece is removed from.
    #[inline]
    pub const fn capture_square(&self) -> Square {
        if self.is_en_passant {
            // Captured pawn shares the mover's origin rank.
            (self.from & !7) | (self.to & 7)
        } else {
            self.to
        }
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.abs_diff(self.to) == 16
    }

    /// `e2e4`, `e7e8q`. Needs no board context.
    pub fn to_uci(&self) -> String {
        let mut out = String::with_capacity(5);
        out.push_str(&square_name(self.from));
        out.push_str(&square_name(self.to));
        if let Some(promotion) = self.promotion {
            out.push(promotion.kind.to_char());
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}
