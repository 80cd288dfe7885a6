//! Attack queries.
//!
//! Attacks are computed in reverse from the target square: a square is
//! attacked by a knight if a knight sits on one of the knight targets of that
//! square, and likewise for kings, pawns (using the defender's pawn table),
//! and sliders (walking rays out from the target).

use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};
use crate::position::chess_types::*;
use crate::position::position::Position;

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    let kings = position.pieces[color.index()][PieceKind::King.index()];
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

/// A side without a king is never in check.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    let attackers = &position.pieces[attacker_color.index()];

    if pawn_attacks(attacker_color.opposite(), square) & attackers[PieceKind::Pawn.index()] != 0 {
        return true;
    }

    if knight_attacks(square) & attackers[PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & attackers[PieceKind::King.index()] != 0 {
        return true;
    }

    let queens = attackers[PieceKind::Queen.index()];

    let diagonal = attackers[PieceKind::Bishop.index()] | queens;
    if BISHOP_RAYS[square as usize] & diagonal != 0
        && bishop_attacks(square, position.occupancy_all) & diagonal != 0
    {
        return true;
    }

    let orthogonal = attackers[PieceKind::Rook.index()] | queens;
    if ROOK_RAYS[square as usize] & orthogonal != 0
        && rook_attacks(square, position.occupancy_all) & orthogonal != 0
    {
        return true;
    }

    false
}
