//! Rank estimators for the link graph.
//!
//! # Overview
//!
//! Two independent estimators consume the same [`LinkGraph`] and produce a
//! [`RankVector`], each answering "how important is this node?" a different
//! way:
//!
//! - **Stochastic** (`stochastic`): simulate many independent random walks
//!   and count where they end up. Converges to the distribution-based rank
//!   as `repeats × steps` grows, but is only reproducible under a seeded
//!   RNG.
//! - **Distribution** (`distribution`): propagate a probability mass vector
//!   through the graph for a fixed number of iterations (power iteration
//!   without damping or teleportation). Fully deterministic.
//!
//! Both attribute visible score to dangling nodes: a walk that lands on one
//! records its hit there, and mass that flows into one stays there for that
//! iteration and then leaks out of the system. That asymmetry is part of
//! what these estimators measure, not an artifact to normalize away.
//!
//! The `top` module sorts either estimator's output for presentation.

pub mod distribution;
pub mod stochastic;
pub mod top;

use petgraph::graph::NodeIndex;

use crate::graph::LinkGraph;

pub use distribution::{DistributionConfig, distribution_rank};
pub use stochastic::{WalkConfig, stochastic_rank};
pub use top::top_n;

// ---------------------------------------------------------------------------
// RankVector
// ---------------------------------------------------------------------------

/// Scores produced by one estimator run, indexed by [`NodeIndex`].
///
/// Covers every interned node, dangling nodes included. Created fresh per
/// run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RankVector {
    pub(crate) scores: Vec<f64>,
}

impl RankVector {
    /// An all-zero vector sized for `graph`.
    #[must_use]
    pub fn zeroed(graph: &LinkGraph) -> Self {
        Self {
            scores: vec![0.0; graph.node_count()],
        }
    }

    /// Score of a node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not belong to the graph this vector was
    /// computed for.
    #[must_use]
    pub fn score(&self, idx: NodeIndex) -> f64 {
        self.scores[idx.index()]
    }

    /// Score of a labeled node, `None` for labels the graph never saw.
    #[must_use]
    pub fn get(&self, graph: &LinkGraph, label: &str) -> Option<f64> {
        graph.node_index(label).map(|idx| self.score(idx))
    }

    /// Sum of all scores, dangling entries included.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Number of entries (all interned nodes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if the vector has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Labeled `(node, score)` pairs in node insertion order.
    pub fn labeled<'a>(&'a self, graph: &'a LinkGraph) -> impl Iterator<Item = (&'a str, f64)> {
        graph
            .graph
            .node_indices()
            .map(|idx| (&graph.graph[idx], self.scores[idx.index()]))
            .map(|(label, score)| (label.as_str(), score))
    }
}
