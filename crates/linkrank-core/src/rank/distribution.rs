//! Deterministic rank estimation by power iteration.
//!
//! # Algorithm
//!
//! Start from the uniform distribution over source nodes
//! (`1 / source_count` each, zero on dangling nodes) and run exactly
//! `steps` iterations. Each iteration fans every source's mass out in equal
//! shares along its out-edge list (duplicate links carry duplicate shares)
//! into a fresh accumulator, which then replaces the mass vector wholesale.
//!
//! # The leak
//!
//! Mass that flows into a dangling node rests there for one iteration and
//! is then gone: dangling nodes never redistribute, and nothing teleports
//! mass back. The vector's sum therefore decays by exactly the dangling
//! intake of each iteration, and stays at 1.0 only for graphs with no
//! dangling nodes. This mirrors the reference estimator and must not be
//! "fixed" with a damping factor here; damping would be a separate,
//! explicitly configured extension.
//!
//! # Cost
//!
//! O(steps × edge_count), no randomness, bit-for-bit deterministic.

use tracing::{debug, instrument};

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use crate::rank::RankVector;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the distribution estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionConfig {
    /// Number of propagation iterations. Default: 100.
    pub steps: u32,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self { steps: 100 }
    }
}

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

/// Estimate node rank by propagating a probability mass vector.
///
/// `steps = 0` is valid and returns the uniform initial distribution.
///
/// # Errors
///
/// Returns [`RankError::EmptyGraph`] if the graph has no source nodes.
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(graph), fields(steps = config.steps))]
pub fn distribution_rank(graph: &LinkGraph, config: &DistributionConfig) -> Result<RankVector> {
    let sources = graph.sources();
    if sources.is_empty() {
        return Err(RankError::EmptyGraph);
    }

    let adjacency = graph.out_targets();
    let node_count = graph.node_count();

    let initial = 1.0 / sources.len() as f64;
    let mut mass = vec![0.0_f64; node_count];
    for &source in &sources {
        mass[source.index()] = initial;
    }

    let mut next = vec![0.0_f64; node_count];
    for _ in 0..config.steps {
        for value in &mut next {
            *value = 0.0;
        }

        // Only sources redistribute; whatever sits on a dangling node is
        // dropped when the accumulator replaces the mass vector.
        for &source in &sources {
            let targets = &adjacency[source.index()];
            let share = mass[source.index()] / targets.len() as f64;
            for &target in targets {
                next[target.index()] += share;
            }
        }

        // Barrier: an iteration reads only the fully committed predecessor.
        std::mem::swap(&mut mass, &mut next);
    }

    debug!(
        iterations = config.steps,
        retained_mass = mass.iter().sum::<f64>(),
        "distribution estimation finished"
    );

    Ok(RankVector { scores: mass })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
