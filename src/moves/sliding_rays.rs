//! Ray walking for sliding pieces.
//!
//! Directions are square offsets; `EDGE_DISTANCE[sq][dir]` is how many steps
//! fit before the board edge, so a walk never wraps onto another rank or
//! file. A walk includes each empty square and stops after the first occupied
//! square, whatever its color; callers mask out their own pieces.

use crate::position::chess_types::Square;

pub const NORTH: usize = 0;
pub const SOUTH: usize = 1;
pub const WEST: usize = 2;
pub const EAST: usize = 3;
pub const NORTH_WEST: usize = 4;
pub const SOUTH_EAST: usize = 5;
pub const NORTH_EAST: usize = 6;
pub const SOUTH_WEST: usize = 7;

pub const DIRECTION_OFFSETS: [i8; 8] = [8, -8, -1, 1, 7, -7, 9, -9];

pub const ORTHOGONAL_DIRECTIONS: [usize; 4] = [NORTH, SOUTH, WEST, EAST];
pub const DIAGONAL_DIRECTIONS: [usize; 4] = [NORTH_WEST, SOUTH_EAST, NORTH_EAST, SOUTH_WEST];

pub const EDGE_DISTANCE: [[u8; 8]; 64] = generate_edge_distance();

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

const fn generate_edge_distance() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as u8;
        let rank = (sq / 8) as u8;
        let north = 7 - rank;
        let south = rank;
        let west = file;
        let east = 7 - file;

        table[sq] = [
            north,
            south,
            west,
            east,
            min(north, west),
            min(south, east),
            min(north, east),
            min(south, west),
        ];
        sq += 1;
    }

    table
}

/// Walk every direction in `directions` from `square` against `occupancy`.
#[inline]
pub fn ray_attacks(square: Square, occupancy: u64, directions: &[usize]) -> u64 {
    let mut attacks = 0u64;
    for &dir in directions {
        attacks |= walk_ray(square, occupancy, dir);
    }
    attacks
}

#[inline]
fn walk_ray(square: Square, occupancy: u64, dir: usize) -> u64 {
    let offset = DIRECTION_OFFSETS[dir] as i32;
    let steps = EDGE_DISTANCE[square as usize][dir];
    let mut target = square as i32;
    let mut attacks = 0u64;

    for _ in 0..steps {
        target += offset;
        let bit = 1u64 << target;
        attacks |= bit;
        if occupancy & bit != 0 {
            break;
        }
    }

    attacks
}

/// Empty-board rays, used as a cheap "could this slider possibly reach" filter.
pub const fn generate_empty_board_rays(directions: [usize; 4]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut rays = 0u64;
        let mut d = 0usize;
        while d < 4 {
            let dir = directions[d];
            let offset = DIRECTION_OFFSETS[dir] as i32;
            let mut target = sq as i32;
            let mut step = 0u8;
            while step < EDGE_DISTANCE[sq][dir] {
                target += offset;
                rays |= 1u64 << target;
                step += 1;
            }
            d += 1;
        }
        table[sq] = rays;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_distances_at_corners() {
        assert_eq!(EDGE_DISTANCE[0], [7, 0, 0, 7, 0, 0, 7, 0]);
        assert_eq!(EDGE_DISTANCE[63], [0, 7, 7, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn walk_includes_first_blocker_and_stops() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = ray_attacks(a1, blocker_on_a4, &[NORTH]);

        assert_eq!(attacks, (1u64 << 8) | (1u64 << 16) | (1u64 << 24));
    }

    #[test]
    fn east_walk_from_h_file_is_empty() {
        assert_eq!(ray_attacks(15, 0, &[EAST, NORTH_EAST, SOUTH_EAST]), 0);
    }
}
