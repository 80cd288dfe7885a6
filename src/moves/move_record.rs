//! Fixed-layout move record for callers across a C boundary.
//!
//! Pieces are encoded as `color * 6 + kind` (white pawn 0 .. black king 11)
//! and `NO_PIECE_CODE` marks an empty captured/promotion slot. The code only
//! exists in this record; the core always works with `Option<Piece>`.

use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;
use crate::position::chess_types::{checked_square, Color, Piece, PieceKind};

pub const NO_PIECE_CODE: u8 = 12;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: u8,
    pub from_square: u8,
    pub to_square: u8,
    pub captured_piece: u8,
    pub promoted_piece: u8,
    pub is_en_passant: u8,
    pub is_castling: u8,
}

#[inline]
pub const fn piece_code(piece: Piece) -> u8 {
    (piece.color.index() * 6 + piece.kind.index()) as u8
}

#[inline]
pub fn optional_piece_code(piece: Option<Piece>) -> u8 {
    piece.map_or(NO_PIECE_CODE, piece_code)
}

/// Decode a boundary piece code; `Ok(None)` for `NO_PIECE_CODE`.
pub fn piece_from_code(code: u8) -> ChessResult<Option<Piece>> {
    if code == NO_PIECE_CODE {
        return Ok(None);
    }

    let color = match code / 6 {
        0 => Color::White,
        1 => Color::Black,
        _ => return Err(ChessError::InvalidPieceCode(code)),
    };
    let kind = PieceKind::from_index((code % 6) as usize).ok_or(ChessError::InvalidPieceCode(code))?;

    Ok(Some(Piece::new(color, kind)))
}

impl From<Move> for MoveRecord {
    fn from(mv: Move) -> Self {
        Self {
            piece: piece_code(mv.piece),
            from_square: mv.from,
            to_square: mv.to,
            captured_piece: optional_piece_code(mv.captured),
            promoted_piece: optional_piece_code(mv.promotion),
            is_en_passant: u8::from(mv.is_en_passant),
            is_castling: u8::from(mv.is_castling),
        }
    }
}

impl TryFrom<MoveRecord> for Move {
    type Error = ChessError;

    fn try_from(record: MoveRecord) -> ChessResult<Self> {
        let piece = piece_from_code(record.piece)?.ok_or(ChessError::InvalidPieceCode(record.piece))?;

        Ok(Move {
            piece,
            from: checked_square(i32::from(record.from_square))?,
            to: checked_square(i32::from(record.to_square))?,
            captured: piece_from_code(record.captured_piece)?,
            promotion: piece_from_code(record.promoted_piece)?,
            is_en_passant: record.is_en_passant != 0,
            is_castling: record.is_castling != 0,
        })
    }
}
