//! Static evaluation.
//!
//! Scores are from the side to move's point of view (negamax convention).
//! Kings carry no material and no positional term.

use crate::position::chess_types::*;
use crate::position::position::Position;

pub trait BoardScorer {
    /// Score from the perspective of the side to move.
    fn score(&self, position: &Position) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

// Tables are laid out a1..h8 (first row is rank 1) from white's side.
// Black looks up `square ^ 56`.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

/// Positional table for `kind`, or `None` for the king.
#[inline]
pub const fn piece_square_table(kind: PieceKind) -> Option<&'static [i32; 64]> {
    match kind {
        PieceKind::Pawn => Some(&PAWN_TABLE),
        PieceKind::Knight => Some(&KNIGHT_TABLE),
        PieceKind::Bishop => Some(&BISHOP_TABLE),
        PieceKind::Rook => Some(&ROOK_TABLE),
        PieceKind::Queen => Some(&QUEEN_TABLE),
        PieceKind::King => None,
    }
}

#[inline]
pub fn piece_square_bonus(piece: Piece, square: Square) -> i32 {
    let index = match piece.color {
        Color::White => square,
        Color::Black => square ^ 56,
    };
    piece_square_table(piece.kind).map_or(0, |table| table[index as usize])
}

/// Sum of positional bonuses for one color's pieces.
pub fn pst_of_color(position: &Position, color: Color) -> i32 {
    let mut total = 0;
    for kind in PieceKind::ALL {
        let piece = Piece::new(color, kind);
        let mut bb = position.bitboard(piece);
        while bb != 0 {
            total += piece_square_bonus(piece, bb.trailing_zeros() as Square);
            bb &= bb - 1;
        }
    }
    total
}

pub fn material_of_color(position: &Position, color: Color) -> i32 {
    PieceKind::ALL
        .into_iter()
        .map(|kind| position.bitboard(Piece::new(color, kind)).count_ones() as i32 * piece_value(kind))
        .sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        let white_minus_black =
            material_of_color(position, Color::White) - material_of_color(position, Color::Black);
        relative_to_side(position.side_to_move(), white_minus_black)
    }
}

/// Material plus piece-square tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, position: &Position) -> i32 {
        let white = material_of_color(position, Color::White) + pst_of_color(position, Color::White);
        let black = material_of_color(position, Color::Black) + pst_of_color(position, Color::Black);
        relative_to_side(position.side_to_move(), white - black)
    }
}

#[inline]
fn relative_to_side(side: Color, white_minus_black: i32) -> i32 {
    match side {
        Color::White => white_minus_black,
        Color::Black => -white_minus_black,
    }
}
