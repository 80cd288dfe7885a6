//! Canonical chess-rule constants.
//!
//! Holds the standard starting FEN and the fixed castling geometry shared by
//! move generation (path/attack checks) and make/undo (rook relocation and
//! rights revocation).

use crate::position::chess_types::{CastlingRight, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Worst-case legal move count is 218; buffers round up.
pub const MAX_MOVES: usize = 256;

/// Fixed squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub right: CastlingRight,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook.
    pub must_be_empty: u64,
    /// King source, transit, and destination.
    pub must_be_safe: [Square; 3],
}

pub const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        right: CastlingRight::WhiteKingside,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        must_be_empty: (1 << 5) | (1 << 6),
        must_be_safe: [4, 5, 6],
    },
    CastlingLane {
        right: CastlingRight::WhiteQueenside,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        must_be_empty: (1 << 1) | (1 << 2) | (1 << 3),
        must_be_safe: [4, 3, 2],
    },
    CastlingLane {
        right: CastlingRight::BlackKingside,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        must_be_empty: (1 << 61) | (1 << 62),
        must_be_safe: [60, 61, 62],
    },
    CastlingLane {
        right: CastlingRight::BlackQueenside,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        must_be_empty: (1 << 57) | (1 << 58) | (1 << 59),
        must_be_safe: [60, 59, 58],
    },
];

/// Lane whose king move is `from -> to`, if any.
#[inline]
pub fn castling_lane_for_king_move(from: Square, to: Square) -> Option<&'static CastlingLane> {
    CASTLING_LANES
        .iter()
        .find(|lane| lane.king_from == from && lane.king_to == to)
}

/// Lane whose rook starts on `square`, if any.
#[inline]
pub fn castling_lane_for_rook_square(square: Square) -> Option<&'static CastlingLane> {
    CASTLING_LANES.iter().find(|lane| lane.rook_from == square)
}
