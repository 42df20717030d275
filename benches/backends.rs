use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sp_suite::{Backend, Dijkstra, Graph};
use std::hint::black_box;

fn create_graph(n: usize, m: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let edges: Vec<(usize, usize, i64)> = (0..m)
        .map(|_| {
            (
                rng.random_range(1..=n),
                rng.random_range(1..=n),
                rng.random_range(1..=1_000),
            )
        })
        .collect();
    Graph::build(n, edges).unwrap()
}

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra backends");

    // (vertices, edges): sparse, medium and dense
    let shapes = [(10_000, 40_000), (10_000, 200_000), (2_000, 1_000_000)];

    for &(n, m) in &shapes {
        let graph = create_graph(n, m, 42);
        let label = format!("{n}x{m}");

        for (name, backend) in [
            ("binary", Backend::BinaryHeap),
            ("dary_avg", Backend::DaryHeap { arity: None }),
            ("dary_4", Backend::DaryHeap { arity: Some(4) }),
            ("radix", Backend::RadixHeap),
        ] {
            group.bench_with_input(BenchmarkId::new(name, &label), &graph, |b, g| {
                b.iter(|| black_box(Dijkstra::new(g).with_backend(backend).solve(1).unwrap()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
