//! King steps and castling.
//!
//! A castling move is emitted only when the right is held, the rook still
//! stands on its corner, the squares between king and rook are empty, and
//! none of the king's source, transit, or destination squares is attacked.

use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::generate_moves_from_attacks;
use crate::moves::bitboard::square_bit;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_list::MoveList;
use crate::position::chess_rules::CASTLING_LANES;
use crate::position::chess_types::*;
use crate::position::position::Position;

pub fn generate_king_moves(position: &Position, out: &mut MoveList) {
    generate_moves_from_attacks(position, PieceKind::King, |sq, _| king_attacks(sq), out);
    generate_castling_moves(position, out);
}

fn generate_castling_moves(position: &Position, out: &mut MoveList) {
    let side = position.side_to_move;
    let enemy = side.opposite();
    let king = Piece::new(side, PieceKind::King);
    let rook = Piece::new(side, PieceKind::Rook);

    for lane in CASTLING_LANES.iter().filter(|lane| lane.right.color() == side) {
        if !position.can_castle(lane.right) {
            continue;
        }
        if position.bitboard(king) & square_bit(lane.king_from) == 0
            || position.bitboard(rook) & square_bit(lane.rook_from) == 0
        {
            continue;
        }
        if position.occupancy_all & lane.must_be_empty != 0 {
            continue;
        }
        if lane
            .must_be_safe
            .iter()
            .any(|&sq| is_square_attacked(position, sq, enemy))
        {
            continue;
        }

        out.push(Move {
            is_castling: true,
            ..Move::quiet(king, lane.king_from, lane.king_to)
        });
    }
}
