use crate::moves::chess_move::Move;
use crate::moves::move_list::MoveList;
use crate::position::chess_types::*;
use crate::position::position::Position;

/// Emit one move per set bit of `targets`, tagging captures with the victim.
#[inline]
pub fn push_target_moves(
    position: &Position,
    piece: Piece,
    from: Square,
    mut targets: u64,
    out: &mut MoveList,
) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        let mv = match position.piece_on(to) {
            Some(victim) => Move::capture(piece, from, to, victim),
            None => Move::quiet(piece, from, to),
        };
        out.push(mv);
        targets &= targets - 1;
    }
}

/// Generate moves for every `kind` piece of the side to move, where
/// `attacks(square, occupancy)` yields its attack set.
#[inline]
pub fn generate_moves_from_attacks(
    position: &Position,
    kind: PieceKind,
    attacks: impl Fn(Square, u64) -> u64,
    out: &mut MoveList,
) {
    let side = position.side_to_move;
    let piece = Piece::new(side, kind);
    let own_occ = position.occupancy_by_color[side.index()];

    let mut pieces = position.pieces[side.index()][kind.index()];
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        let targets = attacks(from, position.occupancy_all) & !own_occ;
        push_target_moves(position, piece, from, targets, out);
        pieces &= pieces - 1;
    }
}
