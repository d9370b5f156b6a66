use criterion::{criterion_group, criterion_main, Criterion, black_box};
use plysplit::{Board, Team};

fn bench_search(c: &mut Criterion) {
    let b = Board::default();
    c.bench_function("search_horizon_3_startpos", |ben| {
        ben.iter(|| {
            let mut p = plysplit::search::SearchParams::default();
            p.horizon = 3;
            let mut s = plysplit::search::alphabeta::Searcher::new(p, Team::White);
            let r = s.search_root(black_box(&b));
            black_box(r.nodes)
        })
    });
    c.bench_function("pool_horizon_3_startpos_4_threads", |ben| {
        ben.iter(|| {
            let mut p = plysplit::search::SearchParams::default();
            p.horizon = 3; p.threads = 4;
            let r = plysplit::search::scheduler::search_position(black_box(&b), Team::White, &p).unwrap();
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
