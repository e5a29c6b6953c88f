use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{Grid, LifeSession, SimpleRng};
use tui_life::types::SimAction;

fn bench_step(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let grid = Grid::random(80, 40, &mut rng).unwrap();

    c.bench_function("grid_step_80x40", |b| {
        b.iter(|| black_box(&grid).step())
    });
}

fn bench_randomize(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut grid = Grid::new(80, 40).unwrap();

    c.bench_function("grid_randomize_80x40", |b| {
        b.iter(|| {
            grid.randomize(&mut rng);
        })
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let mut session = LifeSession::new(80, 40, 12345).unwrap();
    session.handle_action(SimAction::ToggleRun);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
        })
    });
}

fn bench_live_count(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let grid = Grid::random(80, 40, &mut rng).unwrap();

    c.bench_function("grid_live_count_80x40", |b| {
        b.iter(|| black_box(&grid).live_count())
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_randomize,
    bench_session_tick,
    bench_live_count
);
criterion_main!(benches);
