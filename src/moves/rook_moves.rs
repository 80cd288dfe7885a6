use crate::moves::sliding_rays::{generate_empty_board_rays, ray_attacks, ORTHOGONAL_DIRECTIONS};
use crate::position::chess_types::Square;

pub const ROOK_RAYS: [u64; 64] = generate_empty_board_rays(ORTHOGONAL_DIRECTIONS);

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ray_attacks(square, occupancy, &ORTHOGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::{rook_attacks, ROOK_RAYS};

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let d4 = 27u8;
        assert_eq!(ROOK_RAYS[d4 as usize].count_ones(), 14);
        assert_eq!(rook_attacks(d4, 0), ROOK_RAYS[d4 as usize]);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
        assert_eq!(attacks.count_ones(), 3 + 7);
    }
}
