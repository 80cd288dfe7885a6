use crate::moves::sliding_rays::{generate_empty_board_rays, ray_attacks, DIAGONAL_DIRECTIONS};
use crate::position::chess_types::Square;

pub const BISHOP_RAYS: [u64; 64] = generate_empty_board_rays(DIAGONAL_DIRECTIONS);

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    ray_attacks(square, occupancy, &DIAGONAL_DIRECTIONS)
}
