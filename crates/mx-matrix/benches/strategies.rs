use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mx_matrix::{Matrix, Multiplier, Strategy};

fn operands(n: usize) -> (Matrix, Matrix) {
    let a = Matrix::from_fn(n, |i, j| ((i * 31 + j * 17) % 101) as i64);
    let b = Matrix::from_fn(n, |i, j| ((i * 7 + j * 13) % 101) as i64);
    (a, b)
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);

    for n in [64, 128, 256] {
        let (a, b) = operands(n);
        let strategies = [
            Strategy::naive(),
            Strategy::cached(),
            Strategy::blocked(16).unwrap(),
            Strategy::blocked(32).unwrap(),
            Strategy::blocked(64).unwrap(),
        ];
        for s in strategies {
            let id = match s.block_size() {
                Some(bs) => format!("{}-{}", s.name(), bs),
                None => s.name().to_string(),
            };
            group.bench_with_input(BenchmarkId::new(id, n), &n, |bench, _| {
                bench.iter(|| s.multiply(black_box(&a), black_box(&b)).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
