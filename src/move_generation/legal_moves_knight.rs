use crate::move_generation::legal_move_shared::generate_moves_from_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_list::MoveList;
use crate::position::chess_types::PieceKind;
use crate::position::position::Position;

pub fn generate_knight_moves(position: &Position, out: &mut MoveList) {
    generate_moves_from_attacks(position, PieceKind::Knight, |sq, _| knight_attacks(sq), out);
}
