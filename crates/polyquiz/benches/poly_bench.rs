//! Criterion benchmarks for polygon construction and containment.
//! Focus sizes: n in {8, 16, 32, 64} proposed vertices.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyquiz::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_candidates(n: usize, seed: u64) -> Vec<Coord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Coord::new(rng.gen_range(0..=100), rng.gen_range(0..=100)))
        .collect()
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[8_usize, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("propose_chain", n), &n, |b, &n| {
            b.iter_batched(
                || random_candidates(n, 43),
                |candidates| {
                    let mut p = Polygon::new();
                    for cand in candidates {
                        let _accepted = p.propose(cand);
                    }
                    p
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("contains", n), &n, |b, &n| {
            let mut p = Polygon::new();
            for cand in random_candidates(n, 44) {
                p.propose(cand);
            }
            let queries = random_candidates(64, 45);
            b.iter(|| {
                let mut hits = 0_usize;
                for &q in &queries {
                    if p.contains(q) {
                        hits += 1;
                    }
                }
                hits
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon);
criterion_main!(benches);
