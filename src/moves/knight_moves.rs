use crate::moves::bitboard::generate_leaper_table;
use crate::position::chess_types::Square;

const KNIGHT_OFFSETS: [i8; 8] = [17, 15, 10, 6, -6, -10, -15, -17];

pub const KNIGHT_ATTACKS: [u64; 64] = generate_leaper_table(&KNIGHT_OFFSETS, 2);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}
