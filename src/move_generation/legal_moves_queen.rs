use crate::move_generation::legal_move_shared::generate_moves_from_attacks;
use crate::moves::move_list::MoveList;
use crate::moves::queen_moves::queen_attacks;
use crate::position::chess_types::PieceKind;
use crate::position::position::Position;

pub fn generate_queen_moves(position: &Position, out: &mut MoveList) {
    generate_moves_from_attacks(position, PieceKind::Queen, queen_attacks, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::moves::move_list::MoveList;
    use crate::position::position::Position;

    #[test]
    fn queen_is_blocked_at_start() {
        let mut out = MoveList::new();
        generate_queen_moves(&Position::new(), &mut out);
        assert!(out.is_empty());
    }
}
