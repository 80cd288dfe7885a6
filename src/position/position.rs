//! Bitboard board state.
//!
//! `Position` stores one bitboard per concrete piece, occupancy caches derived
//! from them, turn and rights flags, FEN clocks, and the history stack that
//! makes `undo_move` exact. It is mutated in place through make/undo pairs
//! (see `make_unmake.rs`); move generation never clones it.

use std::fmt;

use log::debug;

use crate::errors::{ChessResult, FenError};
use crate::move_generation::legal_move_checks;
use crate::moves::bitboard::square_bit;
use crate::position::chess_types::*;
use crate::position::undo_state::UndoState;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // [color][piece_kind]
    pub(crate) pieces: [[u64; 6]; 2],

    // Derived from `pieces`; refreshed after every mutation.
    pub(crate) occupancy_by_color: [u64; 2],
    pub(crate) occupancy_all: u64,

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,

    pub(crate) history: Vec<UndoState>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard initial placement, all castling rights, white to move.
    pub fn new() -> Self {
        let mut position = Self::empty();

        let back_rank = [
            (PieceKind::Rook, 0x81u64),
            (PieceKind::Knight, 0x42),
            (PieceKind::Bishop, 0x24),
            (PieceKind::Queen, 0x08),
            (PieceKind::King, 0x10),
        ];
        for (kind, mask) in back_rank {
            position.pieces[Color::White.index()][kind.index()] = mask;
            position.pieces[Color::Black.index()][kind.index()] = mask << 56;
        }
        position.pieces[Color::White.index()][PieceKind::Pawn.index()] = 0xFF << 8;
        position.pieces[Color::Black.index()][PieceKind::Pawn.index()] = 0xFF << 48;

        position.castling_rights = CASTLE_ALL;
        position.refresh_occupancy();
        position
    }

    /// Board with no pieces, no rights, white to move, fullmove 1.
    pub(crate) fn empty() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    /// Replace the whole state with `fen`. On error `self` is untouched.
    /// History is cleared: a FEN load cannot be undone.
    pub fn set_from_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let parsed = parse_fen(fen)?;
        *self = parsed;
        debug!("loaded position {fen}");
        Ok(())
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Plain-text board, rank 8 first.
    #[inline]
    pub fn render(&self) -> String {
        render_position(self)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of moves that can currently be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn bitboard(&self, piece: Piece) -> u64 {
        self.pieces[piece.color.index()][piece.kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.occupancy_all
    }

    /// Piece on `square`, rejecting indices outside `0..=63`.
    pub fn piece_at(&self, square: Square) -> ChessResult<Option<Piece>> {
        let square = checked_square(i32::from(square))?;
        Ok(self.piece_on(square))
    }

    #[inline]
    pub fn can_castle(&self, right: CastlingRight) -> bool {
        self.castling_rights & right.bit() != 0
    }

    /// True when `color`'s king is attacked by the other side.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        legal_move_checks::is_king_in_check(self, color)
    }

    pub fn is_square_attacked(&self, square: Square, attacking_color: Color) -> ChessResult<bool> {
        let square = checked_square(i32::from(square))?;
        Ok(legal_move_checks::is_square_attacked(self, square, attacking_color))
    }

    /// Unchecked lookup for in-range squares.
    #[inline]
    pub(crate) fn piece_on(&self, square: Square) -> Option<Piece> {
        let bit = square_bit(square);
        if self.occupancy_all & bit == 0 {
            return None;
        }

        let color = if self.occupancy_by_color[Color::White.index()] & bit != 0 {
            Color::White
        } else {
            Color::Black
        };
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()] & bit != 0)
            .map(|kind| Piece::new(color, kind))
    }

    #[inline]
    pub(crate) fn put_piece(&mut self, piece: Piece, square: Square) {
        self.pieces[piece.color.index()][piece.kind.index()] |= square_bit(square);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, piece: Piece, square: Square) {
        self.pieces[piece.color.index()][piece.kind.index()] &= !square_bit(square);
    }

    pub(crate) fn refresh_occupancy(&mut self) {
        for color in Color::ALL {
            self.occupancy_by_color[color.index()] =
                self.pieces[color.index()].iter().fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[0] | self.occupancy_by_color[1];
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::errors::{ChessError, FenError};
    use crate::position::chess_rules::STARTING_POSITION_FEN;
    use crate::position::chess_types::*;

    #[test]
    fn new_matches_starting_fen() {
        let position = Position::new();
        assert_eq!(position.to_fen(), STARTING_POSITION_FEN);
        assert_eq!(position, Position::from_fen(STARTING_POSITION_FEN).expect("start FEN parses"));
        assert_eq!(position.occupied().count_ones(), 32);
        assert_eq!(position.history_len(), 0);
    }

    #[test]
    fn no_square_is_claimed_by_two_bitboards() {
        let position = Position::new();
        let mut seen = 0u64;
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let bb = position.bitboard(Piece::new(color, kind));
                assert_eq!(seen & bb, 0);
                seen |= bb;
            }
        }
        assert_eq!(seen, position.occupied());
    }

    #[test]
    fn piece_at_reads_and_rejects_out_of_range() {
        let position = Position::new();
        assert_eq!(
            position.piece_at(4),
            Ok(Some(Piece::new(Color::White, PieceKind::King)))
        );
        assert_eq!(
            position.piece_at(59),
            Ok(Some(Piece::new(Color::Black, PieceKind::Queen)))
        );
        assert_eq!(position.piece_at(28), Ok(None));
        assert_eq!(position.piece_at(64), Err(ChessError::SquareOutOfRange(64)));
        assert_eq!(
            position.is_square_attacked(200, Color::White),
            Err(ChessError::SquareOutOfRange(200))
        );
    }

    #[test]
    fn failed_fen_load_leaves_position_unchanged() {
        let mut position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN parses");
        let before = position.clone();

        let err = position.set_from_fen("r3k2r/8/8/8/8/8/8 w KQkq - 0 1");
        assert_eq!(err, Err(FenError::RankCount(7)));
        assert_eq!(position, before);
    }

    #[test]
    fn can_castle_tests_individual_rights() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN parses");
        assert!(position.can_castle(CastlingRight::WhiteKingside));
        assert!(!position.can_castle(CastlingRight::WhiteQueenside));
        assert!(!position.can_castle(CastlingRight::BlackKingside));
        assert!(position.can_castle(CastlingRight::BlackQueenside));
    }
}
