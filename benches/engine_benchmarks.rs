//! Benchmarks for engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_ai::board::{Position, SearchConfig, SearchContext};
use chess_ai::zobrist::ZobristKeys;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn parse(fen: &str) -> Position {
    fen.parse().expect("valid fen")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut castling = parse("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("castling", depth), &depth, |b, &depth| {
            b.iter(|| castling.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [
        ("startpos", chess_ai::board::START_FEN),
        ("middlegame", MIDDLEGAME),
        ("kiwipete", KIWIPETE),
    ] {
        let mut position = parse(fen);
        group.bench_function(name, |b| b.iter(|| black_box(position.legal_moves())));
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut position = Position::new();
                let moves = position.legal_moves();
                let mut ctx = SearchContext::new(SearchConfig::default().threads(1));
                ctx.search(&mut position, &moves, depth)
            })
        });
    }

    for threads in [1, 4] {
        group.bench_with_input(BenchmarkId::new("parallel_root", threads), &threads, |b, &threads| {
            let mut position = parse(MIDDLEGAME);
            let moves = position.legal_moves();
            let config = SearchConfig::default().depth(3).threads(threads);
            b.iter(|| chess_ai::board::search_best_move_with(&position, &moves, &config))
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", chess_ai::board::START_FEN),
        ("middlegame", MIDDLEGAME),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let mut position = parse(fen);
        group.bench_function(BenchmarkId::new("position", name), |b| {
            b.iter(|| black_box(position.evaluate()))
        });
    }

    let keys = ZobristKeys::from_seed(0);
    let position = parse(KIWIPETE);
    group.bench_function("zobrist_hash", |b| b.iter(|| black_box(keys.hash(&position))));

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
