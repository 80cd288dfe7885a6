//! In-place make/undo.
//!
//! `make_move` is the perft hot path and trusts its input: the move must be
//! legal (or pseudo-legal and about to be taken back by the legality probe).
//! Feeding it anything else leaves the board in an unspecified state. Every
//! call must be matched by exactly one later `undo_move`, in LIFO order.

use log::trace;

use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;
use crate::position::chess_rules::{castling_lane_for_king_move, castling_lane_for_rook_square};
use crate::position::chess_types::*;
use crate::position::position::Position;
use crate::position::undo_state::UndoState;

impl Position {
    /// Apply `mv` for the side to move. See the module docs for the contract.
    pub fn make_move(&mut self, mv: Move) {
        let mover = mv.piece.color;

        self.history.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
        });

        if let Some(captured) = mv.captured {
            self.remove_piece(captured, mv.capture_square());
        }

        self.en_passant_square = if mv.is_double_pawn_push() {
            Some((mv.from + mv.to) / 2)
        } else {
            None
        };

        self.castling_rights &= !rights_revoked_by(&mv);

        if mv.is_castling {
            if let Some(lane) = castling_lane_for_king_move(mv.from, mv.to) {
                let rook = Piece::new(mover, PieceKind::Rook);
                self.remove_piece(rook, lane.rook_from);
                self.put_piece(rook, lane.rook_to);
            }
        }

        self.remove_piece(mv.piece, mv.from);
        self.put_piece(mv.promotion.unwrap_or(mv.piece), mv.to);

        if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = mover.opposite();
        self.refresh_occupancy();
    }

    /// Take back the most recent `make_move` and return it.
    pub fn undo_move(&mut self) -> ChessResult<Move> {
        let undo = self.history.pop().ok_or(ChessError::EmptyHistory)?;
        trace!("undo {}", undo.mv);
        self.restore(undo);
        Ok(undo.mv)
    }

    /// Infallible undo for callers that just made a move themselves.
    #[inline]
    pub(crate) fn take_back(&mut self) {
        if let Some(undo) = self.history.pop() {
            self.restore(undo);
        }
    }

    fn restore(&mut self, undo: UndoState) {
        let mv = undo.mv;
        let mover = mv.piece.color;

        self.side_to_move = mover;
        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;

        // The promoted piece is removed; the pawn goes back explicitly.
        self.remove_piece(mv.promotion.unwrap_or(mv.piece), mv.to);
        self.put_piece(mv.piece, mv.from);

        if mv.is_castling {
            if let Some(lane) = castling_lane_for_king_move(mv.from, mv.to) {
                let rook = Piece::new(mover, PieceKind::Rook);
                self.remove_piece(rook, lane.rook_to);
                self.put_piece(rook, lane.rook_from);
            }
        }

        if let Some(captured) = mv.captured {
            self.put_piece(captured, mv.capture_square());
        }

        self.refresh_occupancy();
    }
}

/// Rights lost by playing `mv`, computed from explicit square matches.
fn rights_revoked_by(mv: &Move) -> CastlingRights {
    let mut revoked: CastlingRights = 0;

    if mv.piece.kind == PieceKind::King {
        for right in CastlingRight::ALL {
            if right.color() == mv.piece.color {
                revoked |= right.bit();
            }
        }
    }

    if mv.piece.kind == PieceKind::Rook {
        if let Some(lane) = castling_lane_for_rook_square(mv.from) {
            if lane.right.color() == mv.piece.color {
                revoked |= lane.right.bit();
            }
        }
    }

    if let Some(captured) = mv.captured {
        if captured.kind == PieceKind::Rook {
            if let Some(lane) = castling_lane_for_rook_square(mv.capture_square()) {
                if lane.right.color() == captured.color {
                    revoked |= lane.right.bit();
                }
            }
        }
    }

    revoked
}
