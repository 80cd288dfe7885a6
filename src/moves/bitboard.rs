//! Bitboard masks and table builders shared by the attack tables.

use crate::position::chess_types::Square;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const RANK_1: u64 = 0x0000_0000_0000_00FF;

pub const FILE_MASKS: [u64; 8] = generate_file_masks();
pub const RANK_MASKS: [u64; 8] = generate_rank_masks();

#[inline]
pub const fn square_bit(square: Square) -> u64 {
    1u64 << square
}

const fn generate_file_masks() -> [u64; 8] {
    let mut masks = [0u64; 8];
    let mut file = 0usize;
    while file < 8 {
        masks[file] = FILE_A << file;
        file += 1;
    }
    masks
}

const fn generate_rank_masks() -> [u64; 8] {
    let mut masks = [0u64; 8];
    let mut rank = 0usize;
    while rank < 8 {
        masks[rank] = RANK_1 << (rank * 8);
        rank += 1;
    }
    masks
}

/// Build a per-square table for a fixed-offset piece.
///
/// An offset is dropped when it leaves the board or when the destination's
/// file or rank differs from the origin by more than `max_delta` (which is
/// how a wrap from the h-file onto the a-file shows up).
pub const fn generate_leaper_table(offsets: &[i8], max_delta: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0i32;

    while sq < 64 {
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let to = sq + offsets[i] as i32;
            if to >= 0 && to < 64 {
                let file_delta = (to % 8 - sq % 8).abs();
                let rank_delta = (to / 8 - sq / 8).abs();
                if file_delta <= max_delta && rank_delta <= max_delta {
                    attacks |= 1u64 << to;
                }
            }
            i += 1;
        }

        table[sq as usize] = attacks;
        sq += 1;
    }

    table
}
