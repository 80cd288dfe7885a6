//! Error types shared across the crate.
//!
//! `FenError` describes why a Forsyth-Edwards string was rejected. `ChessError`
//! is the crate-wide error returned by position queries, the undo stack, and
//! the move codecs; FEN failures convert into it with `?`.

use thiserror::Error;

/// Reasons a FEN string can fail to parse.
///
/// The parser never touches a live `Position` until every field has been
/// validated, so receiving one of these means the target position is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN must contain 6 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("piece placement must contain 8 ranks, found {0}")]
    RankCount(usize),

    /// A rank segment whose pieces and empty-runs do not add up to 8 files.
    /// `rank` is the FEN rank label (8 for the first segment, 1 for the last).
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}' in piece placement")]
    PieceChar(char),

    #[error("invalid side-to-move field '{0}'")]
    SideToMove(String),

    #[error("invalid castling rights character '{0}'")]
    CastlingChar(char),

    #[error("invalid en-passant field '{0}'")]
    EnPassant(String),

    #[error("invalid {field}: '{value}' is not a number")]
    Clock { field: &'static str, value: String },
}

/// Crate-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square index outside `0..=63` reached a public query.
    #[error("square index {0} is outside 0..=63")]
    SquareOutOfRange(i32),

    /// `undo_move` was called with no move left to take back.
    #[error("cannot undo: move history is empty")]
    EmptyHistory,

    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("invalid move string '{0}'")]
    InvalidMoveString(String),

    #[error("move '{0}' is not legal in this position")]
    IllegalMove(String),

    /// A boundary move record carried a piece code outside `0..=12`.
    #[error("invalid piece code {0}")]
    InvalidPieceCode(u8),
}

pub type ChessResult<T> = Result<T, ChessError>;
