use crate::move_generation::legal_move_shared::generate_moves_from_attacks;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_list::MoveList;
use crate::position::chess_types::PieceKind;
use crate::position::position::Position;

pub fn generate_bishop_moves(position: &Position, out: &mut MoveList) {
    generate_moves_from_attacks(position, PieceKind::Bishop, bishop_attacks, out);
}
