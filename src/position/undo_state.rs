use crate::moves::chess_move::Move;
use crate::position::chess_types::{CastlingRights, Square};

/// Single history record pushed by `make_move` and popped by `undo_move`.
///
/// The move itself carries the moved, captured, and promotion pieces; only the
/// state that a move overwrites without recording is snapshotted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u32,
    pub prev_fullmove_number: u32,
}
