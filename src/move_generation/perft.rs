//! Perft: exhaustive leaf counting over the legal move tree.
//!
//! Every routine walks the tree with make/undo on the caller's position and
//! leaves it exactly as it was found. Each ply gets its own stack `MoveList`.

use log::debug;

use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;
use crate::moves::move_list::MoveList;
use crate::position::position::Position;

/// Leaf statistics, counted on the moves played at the final ply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf positions exactly `depth` plies below `position`.
pub fn perft<G: MoveGenerator + ?Sized>(generator: &G, position: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveList::new();
    generator.generate_legal_moves_into(position, &mut moves);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in moves.iter() {
        position.make_move(mv);
        nodes += perft(generator, position, depth - 1);
        position.take_back();
    }
    nodes
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &mut Position,
    depth: u32,
) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut moves = MoveList::new();
    generator.generate_legal_moves_into(position, &mut moves);

    let mut divided = Vec::with_capacity(moves.len());
    for &mv in moves.iter() {
        position.make_move(mv);
        let nodes = perft(generator, position, depth - 1);
        position.take_back();

        debug!("{mv}: {nodes}");
        divided.push((mv, nodes));
    }
    divided
}

pub fn perft_detailed<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &mut Position,
    depth: u32,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut moves = MoveList::new();
    generator.generate_legal_moves_into(position, &mut moves);

    let mut total = PerftCounts::default();
    for &mv in moves.iter() {
        position.make_move(mv);
        if depth == 1 {
            total.merge(classify_leaf(generator, position, &mv));
        } else {
            total.merge(perft_detailed(generator, position, depth - 1));
        }
        position.take_back();
    }
    total
}

fn classify_leaf<G: MoveGenerator + ?Sized>(generator: &G, position: &mut Position, mv: &Move) -> PerftCounts {
    let gives_check = is_king_in_check(position, position.side_to_move());
    let is_mate = gives_check && {
        let mut replies = MoveList::new();
        generator.generate_legal_moves_into(position, &mut replies);
        replies.is_empty()
    };

    PerftCounts {
        nodes: 1,
        captures: u64::from(mv.is_capture()),
        en_passant: u64::from(mv.is_en_passant),
        castles: u64::from(mv.is_castling),
        promotions: u64::from(mv.promotion.is_some()),
        checks: u64::from(gives_check),
        checkmates: u64::from(is_mate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::Engine;

    #[test]
    fn depth_zero_counts_single_node() {
        let mut position = Position::new();
        assert_eq!(perft(&Engine, &mut position, 0), 1);
        assert_eq!(
            perft_detailed(&Engine, &mut position, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
        assert!(perft_divide(&Engine, &mut position, 0).is_empty());
    }

    #[test]
    fn start_position_shallow_counts() {
        let mut position = Position::new();
        assert_eq!(perft(&Engine, &mut position, 1), 20);
        assert_eq!(perft(&Engine, &mut position, 2), 400);
        assert_eq!(perft(&Engine, &mut position, 3), 8902);
        assert_eq!(position, Position::new());
    }

    #[test]
    fn detailed_counts_for_start_depth_three() {
        let mut position = Position::new();
        let counts = perft_detailed(&Engine, &mut position, 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn detailed_counts_for_kiwipete_depth_two() {
        let mut position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN parses");
        let counts = perft_detailed(&Engine, &mut position, 2);
        assert_eq!(counts.nodes, 2039);
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
        assert_eq!(counts.promotions, 0);
        assert_eq!(counts.checks, 3);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut position = Position::new();
        let divided = perft_divide(&Engine, &mut position, 3);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 8902);

        let e2e4 = divided
            .iter()
            .find(|(mv, _)| mv.to_uci() == "e2e4")
            .map(|(_, n)| *n);
        assert_eq!(e2e4, Some(600));
    }
}
