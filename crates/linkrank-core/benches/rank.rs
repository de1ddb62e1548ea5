use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use linkrank_core::{
    DistributionConfig, LinkGraph, WalkConfig, distribution_rank, stochastic_rank,
};

#[derive(Clone, Copy, Debug)]
struct GraphTier {
    name: &'static str,
    nodes: usize,
    edges: usize,
}

const TIERS: [GraphTier; 3] = [
    GraphTier {
        name: "S",
        nodes: 100,
        edges: 400,
    },
    GraphTier {
        name: "M",
        nodes: 2_000,
        edges: 10_000,
    },
    GraphTier {
        name: "L",
        nodes: 20_000,
        edges: 120_000,
    },
];

fn synthetic_edges(tier: GraphTier, seed: u64) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..tier.edges)
        .map(|_| {
            let a = rng.gen_range(0..tier.nodes);
            let b = rng.gen_range(0..tier.nodes);
            (format!("n{a}"), format!("n{b}"))
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph.build");

    for tier in TIERS {
        let edges = synthetic_edges(tier, 0x11A7 + tier.edges as u64);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::new("from_edges", tier.name), &edges, |b, edges| {
            b.iter(|| black_box(LinkGraph::from_edges(edges.iter().cloned())));
        });
    }

    group.finish();
}

fn bench_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank.estimate");

    for tier in TIERS {
        let graph = LinkGraph::from_edges(synthetic_edges(tier, 0x11A7 + tier.edges as u64));

        // Trial counts scaled down from production defaults so the L tier
        // stays under a second per iteration.
        let walk = WalkConfig {
            repeats: 10_000,
            steps: 100,
        };
        group.throughput(Throughput::Elements(walk.repeats));
        group.bench_with_input(
            BenchmarkId::new("stochastic", tier.name),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(0x57EB);
                    black_box(stochastic_rank(graph, &walk, &mut rng))
                });
            },
        );

        let dist = DistributionConfig { steps: 100 };
        group.throughput(Throughput::Elements(
            u64::from(dist.steps) * graph.edge_count() as u64,
        ));
        group.bench_with_input(
            BenchmarkId::new("distribution", tier.name),
            &graph,
            |b, graph| b.iter(|| black_box(distribution_rank(graph, &dist))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_estimators);
criterion_main!(benches);
