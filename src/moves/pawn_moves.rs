use crate::moves::bitboard::generate_leaper_table;
use crate::position::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_leaper_table(&[7, 9], 1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_leaper_table(&[-7, -9], 1);

/// Diagonal capture targets of a `color` pawn standing on `square`.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, BLACK_PAWN_ATTACKS, WHITE_PAWN_ATTACKS};
    use crate::position::chess_types::Color;

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2 = 12u8;
        let expected = (1u64 << 19) | (1u64 << 21);
        assert_eq!(WHITE_PAWN_ATTACKS[e2 as usize], expected);
        assert_eq!(pawn_attacks(Color::White, e2), expected);
    }

    #[test]
    fn black_pawn_attacks_from_e7() {
        let e7 = 52u8;
        let expected = (1u64 << 43) | (1u64 << 45);
        assert_eq!(BLACK_PAWN_ATTACKS[e7 as usize], expected);
        assert_eq!(pawn_attacks(Color::Black, e7), expected);
    }

    #[test]
    fn edge_pawns_attack_one_square() {
        assert_eq!(pawn_attacks(Color::White, 8), 1u64 << 17);
        assert_eq!(pawn_attacks(Color::White, 15), 1u64 << 22);
        assert_eq!(pawn_attacks(Color::Black, 55), 1u64 << 46);
        assert_eq!(pawn_attacks(Color::White, 63), 0);
    }
}
