//! Fixed-capacity move buffer.
//!
//! One `MoveList` lives on the stack per search ply, so plies never share
//! storage and generation never allocates.

use std::ops::Deref;

use log::warn;

use crate::moves::chess_move::Move;
use crate::position::chess_rules::MAX_MOVES;
use crate::position::chess_types::{Color, Piece, PieceKind};

// Filler for unused slots; never observable through the slice view.
const UNUSED_SLOT: Move = Move::quiet(Piece::new(Color::White, PieceKind::Pawn), 0, 0);

#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[inline]
    pub const fn new() -> Self {
        Self {
            moves: [UNUSED_SLOT; MAX_MOVES],
            len: 0,
        }
    }

    /// Append a move, returning `false` if the list is full and the move was
    /// dropped. No legal position produces more than 218.
    #[inline]
    pub fn push(&mut self, mv: Move) -> bool {
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
            self.len += 1;
            return true;
        }

        warn!("move list full at {MAX_MOVES}, dropping {mv}");
        false
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Keep only the moves matching `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(&mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for MoveList {
    type Target = [Move];

    #[inline]
    fn deref(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
