//! Move generation front end.
//!
//! `MoveGenerator` is the seam perft and the legality filter are written
//! against. `Engine` is the stateless implementation: it owns nothing, so one
//! value can serve any number of positions.

use log::warn;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::perft::{self, PerftCounts};
use crate::moves::chess_move::Move;
use crate::moves::move_list::MoveList;
use crate::moves::move_record::MoveRecord;
use crate::position::position::Position;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};

pub trait MoveGenerator {
    /// Append every pseudo-legal move for the side to move.
    fn generate_pseudo_legal_moves_into(&self, position: &Position, out: &mut MoveList);

    /// Replace `out` with the legal moves for the side to move.
    ///
    /// Each candidate is made, the mover's king is tested, and the move is
    /// taken back, so `position` is unchanged on return.
    fn generate_legal_moves_into(&self, position: &mut Position, out: &mut MoveList) {
        out.clear();
        self.generate_pseudo_legal_moves_into(position, out);

        let mover = position.side_to_move();
        out.retain(|&mv| {
            position.make_move(mv);
            let legal = !is_king_in_check(position, mover);
            position.take_back();
            legal
        });
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl MoveGenerator for Engine {
    fn generate_pseudo_legal_moves_into(&self, position: &Position, out: &mut MoveList) {
        generate_pawn_moves(position, out);
        generate_knight_moves(position, out);
        generate_bishop_moves(position, out);
        generate_rook_moves(position, out);
        generate_queen_moves(position, out);
        generate_king_moves(position, out);
    }
}

impl Engine {
    pub const fn new() -> Self {
        Engine
    }

    pub fn generate_pseudo_legal_moves(&self, position: &Position) -> MoveList {
        let mut out = MoveList::new();
        self.generate_pseudo_legal_moves_into(position, &mut out);
        out
    }

    pub fn generate_legal_moves(&self, position: &mut Position) -> MoveList {
        let mut out = MoveList::new();
        self.generate_legal_moves_into(position, &mut out);
        out
    }

    /// Write legal moves into a caller buffer and return how many were
    /// written. A short buffer receives the first `buffer.len()` moves.
    pub fn fill_legal_moves(&self, position: &mut Position, buffer: &mut [MoveRecord]) -> usize {
        let moves = self.generate_legal_moves(position);
        if moves.len() > buffer.len() {
            warn!(
                "legal move buffer holds {} of {} moves; truncating",
                buffer.len(),
                moves.len()
            );
        }

        let written = moves.len().min(buffer.len());
        for (slot, mv) in buffer.iter_mut().zip(moves.iter()) {
            *slot = MoveRecord::from(*mv);
        }
        written
    }

    pub fn is_checkmate(&self, position: &mut Position) -> bool {
        position.is_in_check(position.side_to_move())
            && self.generate_legal_moves(position).is_empty()
    }

    pub fn is_stalemate(&self, position: &mut Position) -> bool {
        !position.is_in_check(position.side_to_move())
            && self.generate_legal_moves(position).is_empty()
    }

    /// Uniformly chosen legal move, or `None` when the game is over.
    pub fn random_legal_move<R: Rng + ?Sized>(
        &self,
        position: &mut Position,
        rng: &mut R,
    ) -> Option<Move> {
        self.generate_legal_moves(position).choose(rng).copied()
    }

    pub fn perft(&self, position: &mut Position, depth: u32) -> u64 {
        perft::perft(self, position, depth)
    }

    pub fn perft_divide(&self, position: &mut Position, depth: u32) -> Vec<(Move, u64)> {
        perft::perft_divide(self, position, depth)
    }

    pub fn perft_detailed(&self, position: &mut Position, depth: u32) -> PerftCounts {
        perft::perft_detailed(self, position, depth)
    }

    /// Material plus piece-square score from the side to move's point of view.
    pub fn evaluate_position(&self, position: &Position) -> i32 {
        PieceSquareScorer.score(position)
    }
}
