//! Criterion comparison of the two lookup strategies across dataset scales.
//!
//! Run with: `cargo bench -p lookup-core`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lookup_core::{generate_index, generate_sequence, indexed_find, linear_find};

const CHILDREN: u32 = 10;
const PROBES: usize = 64;

/// Deterministic probe targets spread across the id range, with a slice of
/// out-of-range parents so misses are measured too.
fn probe_targets(parents: u32) -> Vec<(u32, u32)> {
    let mut rng = SmallRng::seed_from_u64(42);
    (0..PROBES)
        .map(|_| {
            (
                rng.gen_range(0..parents + parents / 8),
                rng.gen_range(0..CHILDREN),
            )
        })
        .collect()
}

fn bench_lookup_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for parents in [1_000u32, 10_000, 100_000] {
        let sequence = generate_sequence(parents, CHILDREN);
        let index = generate_index(parents, CHILDREN);
        let probes = probe_targets(parents);

        group.bench_with_input(
            BenchmarkId::new("linear", parents),
            &probes,
            |b, probes| {
                b.iter(|| {
                    for &(parent, child) in probes {
                        black_box(linear_find(&sequence, parent, child));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hashed", parents),
            &probes,
            |b, probes| {
                b.iter(|| {
                    for &(parent, child) in probes {
                        black_box(indexed_find(&index, parent, child));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_lookup_strategies);
criterion_main!(benches);
