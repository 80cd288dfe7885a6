//! King attack table.
//!
//! Castling is not an attack and is generated separately from the castling
//! lanes in `position::chess_rules`.

use crate::moves::bitboard::generate_leaper_table;
use crate::position::chess_types::Square;

const KING_OFFSETS: [i8; 8] = [9, 8, 7, 1, -1, -7, -8, -9];

pub const KING_ATTACKS: [u64; 64] = generate_leaper_table(&KING_OFFSETS, 1);

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, KING_ATTACKS};

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        let a1 = 0u8;
        assert_eq!(KING_ATTACKS[a1 as usize].count_ones(), 3);
        assert_eq!(king_attacks(a1).count_ones(), 3);
    }

    #[test]
    fn king_on_h4_does_not_wrap_to_a_file() {
        let h4 = 31u8;
        assert_eq!(king_attacks(h4).count_ones(), 5);
        assert_eq!(king_attacks(h4) & (1u64 << 32), 0);
        assert_eq!(king_attacks(h4) & (1u64 << 24), 0);
    }
}
