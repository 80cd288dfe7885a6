use crate::move_generation::legal_move_shared::generate_moves_from_attacks;
use crate::moves::move_list::MoveList;
use crate::moves::rook_moves::rook_attacks;
use crate::position::chess_types::PieceKind;
use crate::position::position::Position;

pub fn generate_rook_moves(position: &Position, out: &mut MoveList) {
    generate_moves_from_attacks(position, PieceKind::Rook, rook_attacks, out);
}
