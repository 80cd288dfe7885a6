use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};
use crate::position::chess_types::Square;

#[inline]
pub fn queen_rays(square: Square) -> u64 {
    ROOK_RAYS[square as usize] | BISHOP_RAYS[square as usize]
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::{queen_attacks, queen_rays};

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        assert_eq!(queen_rays(27).count_ones(), 27);
        assert_eq!(queen_attacks(27, 0), queen_rays(27));
    }

    #[test]
    fn queen_is_boxed_in_by_neighbours() {
        let d4 = 27u8;
        let ring = (1u64 << 18) | (1u64 << 19) | (1u64 << 20) | (1u64 << 26)
            | (1u64 << 28) | (1u64 << 34) | (1u64 << 35) | (1u64 << 36);
        assert_eq!(queen_attacks(d4, ring), ring);
    }
}
