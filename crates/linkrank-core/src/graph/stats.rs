//! Basic statistics for a link graph.
//!
//! # Statistics Provided
//!
//! - **source_count**: Nodes with at least one out-edge. This is the node
//!   count reported to users and the denominator of the uniform initial
//!   distribution.
//! - **edge_count**: Total links, duplicates counted.
//! - **dangling_count**: Nodes that only ever appear as targets. Walks
//!   terminate on them and distribution mass leaks into them.
//! - **max_out_degree**: Highest out-degree over all sources, parallel
//!   edges counted.

use serde::Serialize;

use crate::graph::build::LinkGraph;

/// Summary statistics for a [`LinkGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of source nodes (out-degree ≥ 1).
    pub source_count: usize,
    /// Number of links, duplicates counted.
    pub edge_count: usize,
    /// Number of dangling nodes (targets with no out-edges).
    pub dangling_count: usize,
    /// Maximum out-degree over all nodes.
    pub max_out_degree: usize,
}

impl GraphStats {
    /// Compute statistics from a [`LinkGraph`].
    #[must_use]
    pub fn from_graph(graph: &LinkGraph) -> Self {
        let source_count = graph.source_count();
        let max_out_degree = graph
            .graph
            .node_indices()
            .map(|idx| graph.out_degree(idx))
            .max()
            .unwrap_or(0);

        Self {
            source_count,
            edge_count: graph.edge_count(),
            dangling_count: graph.node_count() - source_count,
            max_out_degree,
        }
    }
}
