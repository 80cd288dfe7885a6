//! Small value types shared by the board, move generation, and codecs.
//!
//! Color and piece kind are two orthogonal enums; an empty square is always
//! `Option::<Piece>::None`, never an extra enum value.

use crate::errors::{ChessError, ChessResult};

/// Board square index, `0 == a1`, `7 == h1`, `63 == h8` (`rank * 8 + file`).
pub type Square = u8;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Square offset of a single pawn push for this color.
    #[inline]
    pub const fn pawn_push(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => -8,
        }
    }
}

/// Piece kind (color is carried separately so bitboards index as `[color][kind]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PieceKind::Pawn),
            1 => Some(PieceKind::Knight),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Queen),
            5 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// One of the 12 concrete pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    #[inline]
    pub fn to_fen_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        PieceKind::from_char(ch).map(|kind| Piece::new(color, kind))
    }
}

/// One of the four independent castling permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingRight {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastlingRight {
    /// FEN order: `KQkq`.
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingside,
        CastlingRight::WhiteQueenside,
        CastlingRight::BlackKingside,
        CastlingRight::BlackQueenside,
    ];

    #[inline]
    pub const fn bit(self) -> CastlingRights {
        match self {
            CastlingRight::WhiteKingside => CASTLE_WHITE_KINGSIDE,
            CastlingRight::WhiteQueenside => CASTLE_WHITE_QUEENSIDE,
            CastlingRight::BlackKingside => CASTLE_BLACK_KINGSIDE,
            CastlingRight::BlackQueenside => CASTLE_BLACK_QUEENSIDE,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            CastlingRight::WhiteKingside | CastlingRight::WhiteQueenside => Color::White,
            CastlingRight::BlackKingside | CastlingRight::BlackQueenside => Color::Black,
        }
    }

    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            CastlingRight::WhiteKingside => 'K',
            CastlingRight::WhiteQueenside => 'Q',
            CastlingRight::BlackKingside => 'k',
            CastlingRight::BlackQueenside => 'q',
        }
    }
}

/// Castling rights bitmask, one bit per `CastlingRight`.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

/// Validate an externally supplied square index.
#[inline]
pub fn checked_square(index: i32) -> ChessResult<Square> {
    if (0..64).contains(&index) {
        Ok(index as Square)
    } else {
        Err(ChessError::SquareOutOfRange(index))
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_chars_map_both_ways() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_fen_char(piece.to_fen_char()), Some(piece));
            }
        }
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
    }

    #[test]
    fn checked_square_rejects_out_of_range() {
        assert_eq!(checked_square(0), Ok(0));
        assert_eq!(checked_square(63), Ok(63));
        assert_eq!(checked_square(64), Err(ChessError::SquareOutOfRange(64)));
        assert_eq!(checked_square(-1), Err(ChessError::SquareOutOfRange(-1)));
    }

    #[test]
    fn castling_bits_are_disjoint() {
        let mut seen = 0;
        for right in CastlingRight::ALL {
            assert_eq!(seen & right.bit(), 0);
            seen |= right.bit();
        }
        assert_eq!(seen, CASTLE_ALL);
    }
}
