use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_core::move_generation::move_generator::Engine;
use chess_core::position::chess_rules::STARTING_POSITION_FEN;
use chess_core::position::position::Position;

/// A FEN plus its known node counts, indexed from depth 1.
struct PerftCase {
    label: &'static str,
    fen: &'static str,
    nodes_by_depth: &'static [u64],
}

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME_ROOKS: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const MIRRORED_PROMOTIONS: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
const DISCOVERED_CHECKS: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

static QUICK: [PerftCase; 3] = [
    PerftCase { label: "startpos", fen: STARTING_POSITION_FEN, nodes_by_depth: &[20, 400, 8902] },
    PerftCase { label: "kiwipete", fen: KIWIPETE, nodes_by_depth: &[48, 2039] },
    PerftCase { label: "position_3", fen: ENDGAME_ROOKS, nodes_by_depth: &[14, 191, 2812] },
];

static STANDARD: [PerftCase; 5] = [
    PerftCase { label: "startpos", fen: STARTING_POSITION_FEN, nodes_by_depth: &[20, 400, 8902, 197_281] },
    PerftCase { label: "kiwipete", fen: KIWIPETE, nodes_by_depth: &[48, 2039, 97_862] },
    PerftCase { label: "position_3", fen: ENDGAME_ROOKS, nodes_by_depth: &[14, 191, 2812, 43_238] },
    PerftCase { label: "position_4", fen: MIRRORED_PROMOTIONS, nodes_by_depth: &[6, 264, 9467] },
    PerftCase { label: "position_5", fen: DISCOVERED_CHECKS, nodes_by_depth: &[44, 1486, 62_379] },
];

/// `CHESS_BENCH_SUITE=standard` selects the deeper suite; anything else runs quick.
fn selected_suite() -> (&'static str, &'static [PerftCase]) {
    let wants_standard = std::env::var("CHESS_BENCH_SUITE")
        .map(|value| value.eq_ignore_ascii_case("standard"))
        .unwrap_or(false);

    if wants_standard {
        ("standard", &STANDARD)
    } else {
        ("quick", &QUICK)
    }
}

fn perft_nodes(c: &mut Criterion) {
    let (suite, cases) = selected_suite();
    let engine = Engine::new();

    let mut group = c.benchmark_group(format!("perft_{suite}"));
    group
        .sample_size(20)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(4));

    for case in cases {
        let mut position = Position::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth, &nodes) in (1u32..).zip(case.nodes_by_depth) {
            // A wrong count makes the timing meaningless.
            assert_eq!(
                engine.perft(&mut position, depth),
                nodes,
                "{} at depth {depth}",
                case.label
            );

            group.throughput(Throughput::Elements(nodes));
            group.bench_with_input(
                BenchmarkId::new(case.label, depth),
                &depth,
                |b, &depth| b.iter(|| engine.perft(black_box(&mut position), black_box(depth))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, perft_nodes);
criterion_main!(benches);
