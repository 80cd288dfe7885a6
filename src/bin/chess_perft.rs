//! Perft runner for manual move-generator validation.
//!
//! Usage:
//! `cargo run --release --bin chess_perft`
//! `cargo run --release --bin chess_perft -- --depth 5 --divide`
//! `cargo run --release --bin chess_perft -- --fen "<FEN>" --depth 3`
//!
//! Set `RUST_LOG=debug` to see FEN loads and per-move divide lines.

use std::time::Instant;

use log::info;

use chess_core::errors::ChessError;
use chess_core::move_generation::move_generator::Engine;
use chess_core::position::chess_rules::STARTING_POSITION_FEN;
use chess_core::position::position::Position;

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> Result<(), ChessError> {
    env_logger::init();

    let fen = arg_value("--fen").unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
    let depth = arg_value("--depth")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(4);

    let mut position = Position::new();
    position.set_from_fen(&fen)?;
    let engine = Engine::new();

    println!("{}", position.render());
    info!("running perft depth {depth} on {fen}");

    let started = Instant::now();
    let nodes = if has_flag("--divide") {
        let divided = engine.perft_divide(&mut position, depth);
        for (mv, count) in &divided {
            println!("{mv}: {count}");
        }
        println!("moves: {}", divided.len());
        divided.iter().map(|(_, count)| count).sum()
    } else {
        engine.perft(&mut position, depth)
    };
    let elapsed = started.elapsed();

    let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    println!(
        "depth={depth} nodes={nodes} elapsed_ms={} nps={nps:.0}",
        elapsed.as_millis()
    );
    Ok(())
}
