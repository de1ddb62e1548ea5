//! Monte-Carlo rank estimation by random walk.
//!
//! # Algorithm
//!
//! Repeat `repeats` independent trials:
//!
//! 1. Start on a source node drawn uniformly at random.
//! 2. Take up to `steps` transitions, each drawn uniformly from the current
//!    node's ordered out-edge list (so duplicate links weight the draw).
//! 3. Stop early if the walk lands on a dangling node.
//! 4. Credit the final node (dangling or not) with one hit.
//!
//! Scores are hit counts scaled by `1 / repeats`, so they always sum to 1
//! for `repeats ≥ 1`. A trial whose very first transition reaches a
//! dangling node still counts: that node keeps the hit. Resampling instead
//! would change the distribution the estimator converges to.
//!
//! # Cost
//!
//! O(repeats × steps) transitions, each O(1) over the prebuilt adjacency
//! lists. Results are reproducible only when the caller seeds the RNG.

use rand::Rng;
use tracing::{debug, instrument};

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use crate::rank::RankVector;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the stochastic estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkConfig {
    /// Number of independent trials. Default: 1,000,000.
    pub repeats: u64,
    /// Maximum transitions per trial. Default: 100.
    pub steps: u32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            repeats: 1_000_000,
            steps: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

/// Estimate node rank by simulating random walks over `graph`.
///
/// `repeats = 0` is a valid degenerate input and yields an all-zero vector;
/// `steps = 0` credits every trial to its start node.
///
/// # Errors
///
/// Returns [`RankError::EmptyGraph`] if the graph has no source nodes.
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(graph, rng), fields(repeats = config.repeats, steps = config.steps))]
pub fn stochastic_rank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    config: &WalkConfig,
    rng: &mut R,
) -> Result<RankVector> {
    let sources = graph.sources();
    if sources.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    if config.repeats == 0 {
        return Ok(RankVector::zeroed(graph));
    }

    let adjacency = graph.out_targets();
    let mut hits = vec![0_u64; graph.node_count()];

    for _ in 0..config.repeats {
        let mut current = sources[rng.gen_range(0..sources.len())];
        for _ in 0..config.steps {
            let targets = &adjacency[current.index()];
            if targets.is_empty() {
                // Dangling: the trial ends here and the hit stays here.
                break;
            }
            current = targets[rng.gen_range(0..targets.len())];
        }
        hits[current.index()] += 1;
    }

    let scale = 1.0 / config.repeats as f64;
    let scores = hits.iter().map(|&count| count as f64 * scale).collect();

    debug!(
        trials = config.repeats,
        nodes_hit = hits.iter().filter(|&&count| count > 0).count(),
        "stochastic estimation finished"
    );

    Ok(RankVector { scores })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
