//! Chess rules core: bitboard position, legal move generation, make/undo,
//! perft, and a small material + piece-square evaluation.
//!
//! The position is mutated in place through `make_move`/`undo_move` pairs;
//! the `Engine` is stateless and can be shared across positions.

pub mod errors;

pub mod position {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod make_unmake;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod bitboard;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_list;
    pub mod move_record;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_rays;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use errors::{ChessError, ChessResult, FenError};
pub use move_generation::move_generator::{Engine, MoveGenerator};
pub use moves::chess_move::Move;
pub use moves::move_record::MoveRecord;
pub use position::chess_types::{CastlingRight, Color, Piece, PieceKind, Square};
pub use position::position::Position;
