use criterion::{criterion_group, criterion_main, Criterion, black_box};
use plysplit::{Position, Team};

fn bench_eval(c: &mut Criterion) {
    let b = Position::from_moves(&["e2e4", "g8f6", "e4e5", "f6d5"]).unwrap().into_board();
    c.bench_function("evaluate_opening", |ben| {
        ben.iter(|| {
            let v = plysplit::search::eval::evaluate(black_box(&b), Team::White);
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
