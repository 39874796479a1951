//! Benchmarks for rules and search performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::{Board, SearchParams, Searcher};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w";
const OPEN_POSITION: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w";

/// Count leaf positions reached by playing every legal move to `depth`.
fn count_leaves(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let side = board.side_to_move();
    board
        .all_legal_moves(side)
        .into_iter()
        .map(|mv| {
            let mut child = board.clone();
            child.play(mv);
            count_leaves(&child, depth - 1)
        })
        .sum()
}

fn bench_move_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_tree");
    group.sample_size(10);

    let board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| count_leaves(&board, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", Board::new()),
        ("middlegame", Board::try_from_layout(MIDDLEGAME).unwrap()),
        ("open", Board::try_from_layout(OPEN_POSITION).unwrap()),
    ];

    for (name, board) in &positions {
        let side = board.side_to_move();
        group.bench_function(*name, |b| {
            b.iter(|| black_box(board.all_legal_moves(side)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    let startpos = Board::new();
    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            let params = SearchParams {
                depth,
                ..SearchParams::default()
            };
            b.iter(|| {
                let mut searcher = Searcher::with_seed(params.clone(), 7);
                searcher.choose_move(startpos.side_to_move(), &startpos)
            })
        });
    }

    let middlegame = Board::try_from_layout(MIDDLEGAME).unwrap();
    group.bench_function("middlegame_3", |b| {
        b.iter(|| {
            let mut searcher = Searcher::with_seed(SearchParams::default(), 7);
            searcher.choose_move(middlegame.side_to_move(), &middlegame)
        })
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", Board::new()),
        ("middlegame", Board::try_from_layout(MIDDLEGAME).unwrap()),
        ("endgame", Board::try_from_layout("8/5k2/8/8/8/8/5K2/4R3 w").unwrap()),
    ];

    for (name, board) in &positions {
        group.bench_with_input(BenchmarkId::new("position", name), board, |b, board| {
            b.iter(|| black_box(board.evaluate(board.side_to_move())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_move_tree,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
