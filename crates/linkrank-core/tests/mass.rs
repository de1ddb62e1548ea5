//! Property tests for mass conservation and accounting invariants.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use linkrank_core::{
    DistributionConfig, LinkGraph, WalkConfig, distribution_rank, stochastic_rank,
};

/// Edge lists over a small label space, sized to shake out interning,
/// duplicate-edge, and dangling behavior without slow cases.
fn arb_edges() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((0u8..12, 0u8..12), 1..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(a, b)| (format!("n{a}"), format!("n{b}")))
            .collect()
    })
}

proptest! {
    #[test]
    fn stochastic_hits_always_sum_to_one(
        edges in arb_edges(),
        repeats in 1u64..400,
        steps in 0u32..15,
        seed in any::<u64>(),
    ) {
        let graph = LinkGraph::from_edges(edges);
        let mut rng = StdRng::seed_from_u64(seed);
        let ranks = stochastic_rank(&graph, &WalkConfig { repeats, steps }, &mut rng)
            .expect("non-empty graph");
        prop_assert!((ranks.total() - 1.0).abs() < 1e-9, "total = {}", ranks.total());
    }

    #[test]
    fn distribution_mass_never_exceeds_one(
        edges in arb_edges(),
        steps in 0u32..25,
    ) {
        let graph = LinkGraph::from_edges(edges);
        let ranks = distribution_rank(&graph, &DistributionConfig { steps })
            .expect("non-empty graph");
        prop_assert!(ranks.total() <= 1.0 + 1e-9, "total = {}", ranks.total());
        prop_assert!(ranks.labeled(&graph).all(|(_, score)| score >= 0.0));
    }

    #[test]
    fn distribution_conserves_mass_when_closed(
        edges in arb_edges(),
        steps in 0u32..25,
    ) {
        // Close the graph: every node that would dangle gets a self-loop,
        // so no leak is possible.
        let mut edges = edges;
        let labels: std::collections::BTreeSet<String> = edges
            .iter()
            .flat_map(|(a, b)| [a.clone(), b.clone()])
            .collect();
        let sources: std::collections::BTreeSet<String> =
            edges.iter().map(|(a, _)| a.clone()).collect();
        for label in &labels {
            if !sources.contains(label) {
                edges.push((label.clone(), label.clone()));
            }
        }

        let graph = LinkGraph::from_edges(edges);
        let ranks = distribution_rank(&graph, &DistributionConfig { steps })
            .expect("non-empty graph");
        prop_assert!(
            (ranks.total() - 1.0).abs() < 1e-9,
            "closed graph leaked: total = {}",
            ranks.total()
        );
    }

    #[test]
    fn zero_steps_distribution_is_uniform_over_sources(edges in arb_edges()) {
        let graph = LinkGraph::from_edges(edges);
        let ranks = distribution_rank(&graph, &DistributionConfig { steps: 0 })
            .expect("non-empty graph");

        let expected = 1.0 / graph.source_count() as f64;
        for source in graph.sources() {
            let score = ranks.score(source);
            prop_assert!((score - expected).abs() < 1e-12, "source score = {score}");
        }
    }
}
