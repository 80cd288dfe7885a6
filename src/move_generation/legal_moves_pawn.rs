//! Pawn move generation: pushes, double pushes, captures, en passant, and
//! promotions (queen, rook, bishop, knight for every promoting move).

use crate::moves::bitboard::{square_bit, RANK_MASKS};
use crate::moves::chess_move::Move;
use crate::moves::move_list::MoveList;
use crate::moves::pawn_moves::pawn_attacks;
use crate::position::chess_types::*;
use crate::position::position::Position;

pub fn generate_pawn_moves(position: &Position, out: &mut MoveList) {
    let side = position.side_to_move;
    let pawn = Piece::new(side, PieceKind::Pawn);
    let enemy_occ = position.occupancy_by_color[side.opposite().index()];
    let empty = !position.occupancy_all;

    let (start_rank, promotion_rank) = match side {
        Color::White => (RANK_MASKS[1], RANK_MASKS[7]),
        Color::Black => (RANK_MASKS[6], RANK_MASKS[0]),
    };
    let push = side.pawn_push();

    let mut pawns = position.pieces[side.index()][PieceKind::Pawn.index()];
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;

        let one_step = from as i8 + push;
        if (0..64).contains(&one_step) && square_bit(one_step as Square) & empty != 0 {
            let one_step = one_step as Square;
            push_pawn_move(Move::quiet(pawn, from, one_step), promotion_rank, out);

            if square_bit(from) & start_rank != 0 {
                let two_step = (one_step as i8 + push) as Square;
                if square_bit(two_step) & empty != 0 {
                    out.push(Move::quiet(pawn, from, two_step));
                }
            }
        }

        // Attack table already excludes file wraps.
        let attacks = pawn_attacks(side, from);

        let mut captures = attacks & enemy_occ;
        while captures != 0 {
            let to = captures.trailing_zeros() as Square;
            if let Some(victim) = position.piece_on(to) {
                push_pawn_move(Move::capture(pawn, from, to, victim), promotion_rank, out);
            }
            captures &= captures - 1;
        }

        if let Some(ep) = position.en_passant_square {
            let victim = Piece::new(side.opposite(), PieceKind::Pawn);
            let mv = Move {
                is_en_passant: true,
                ..Move::capture(pawn, from, ep, victim)
            };
            // The double-pushed pawn must actually be there to be taken.
            if attacks & square_bit(ep) != 0
                && position.bitboard(victim) & square_bit(mv.capture_square()) != 0
            {
                out.push(mv);
            }
        }

        pawns &= pawns - 1;
    }
}

fn push_pawn_move(mv: Move, promotion_rank: u64, out: &mut MoveList) {
    if square_bit(mv.to) & promotion_rank == 0 {
        out.push(mv);
        return;
    }

    for kind in PieceKind::PROMOTIONS {
        out.push(Move {
            promotion: Some(Piece::new(mv.piece.color, kind)),
            ..mv
        });
    }
}
