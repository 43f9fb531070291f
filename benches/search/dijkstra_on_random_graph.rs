use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sssp_core::{
    graph::{node_index, Edge, Graph},
    search::Dijkstra,
};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Random graph with `num_nodes` nodes and `avg_degree` outgoing edges per node.
fn random_graph(num_nodes: usize, avg_degree: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let edges = (0..num_nodes * avg_degree).map(|_| {
        Edge::new(
            node_index(rng.gen_range(0..num_nodes)),
            node_index(rng.gen_range(0..num_nodes)),
            rng.gen_range(0..1000),
        )
    });
    Graph::from_edges(num_nodes, edges).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_on_random_graph");
    for size in [1_000, 10_000, 100_000].iter() {
        let g = random_graph(*size, 4, 42);
        group.throughput(criterion::Throughput::Elements(g.num_edges() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.search(node_index(0)));
            })
        });
    }
    group.finish();
}
