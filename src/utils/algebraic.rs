//! Square conversions between indices and algebraic coordinates (`e4`).

use crate::errors::{ChessError, ChessResult};
use crate::position::chess_types::{file_of, rank_of, Square};

/// Parse `"e4"` into a square index. Returns `None` for anything else.
#[inline]
pub fn algebraic_to_square(square: &str) -> Option<Square> {
    let &[file, rank] = square.as_bytes() else {
        return None;
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Some((rank - b'1') * 8 + (file - b'a'))
}

/// Algebraic name of an in-range square.
#[inline]
pub fn square_name(square: Square) -> String {
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    format!("{file_char}{rank_char}")
}

/// Checked variant of `square_name` for indices coming from outside the crate.
#[inline]
pub fn square_to_algebraic(square: i32) -> ChessResult<String> {
    if !(0..64).contains(&square) {
        return Err(ChessError::SquareOutOfRange(square));
    }
    Ok(square_name(square as Square))
}
