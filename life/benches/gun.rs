use criterion::{black_box, criterion_group, criterion_main, Criterion};
use life::pattern::{self, PatternId};
use life::GAME_OF_LIFE;

fn gun_benchmark(c: &mut Criterion) {
  c.bench_function("gosper gun 500 generations", |b| b.iter(|| {
    let mut gen = pattern::seed(PatternId::GosperGliderGun, 60, 40);
    for _ in 0..black_box(500) {
      gen = gen.step(GAME_OF_LIFE);
    }
    gen
  }));
}

criterion_group!(benches, gun_benchmark);
criterion_main!(benches);
