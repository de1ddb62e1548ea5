//! Graph construction from raw link pairs.
//!
//! # Overview
//!
//! This module parses whitespace-delimited `source target` lines (or
//! pre-split pairs) and builds a [`petgraph`] directed graph suitable for
//! both rank estimators.
//!
//! ## Edge multiplicity
//!
//! A link that appears twice in the input is stored as two parallel edges.
//! Both estimators pick transitions uniformly over the out-edge *list*, so
//! multiplicity deliberately biases rank toward repeated links. Self-loops
//! are kept for the same reason. Deduplicating here would change what the
//! estimators converge to.
//!
//! ## Node identity
//!
//! Node labels are opaque strings (URLs in the reference domain). Each
//! distinct label is interned to a dense [`NodeIndex`] in first-appearance
//! order, which gives every downstream loop a stable iteration order.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, instrument};

use crate::error::{RankError, Result};

// ---------------------------------------------------------------------------
// LinkGraph
// ---------------------------------------------------------------------------

/// A directed link graph built from `(source, target)` pairs.
///
/// Nodes are string labels. An edge `A → B` means "A links to B". Parallel
/// edges and self-loops are preserved exactly as they appeared in the input.
#[derive(Debug)]
pub struct LinkGraph {
    /// Directed graph: nodes = labels, edges = links in input order.
    pub graph: DiGraph<String, ()>,
    /// Mapping from label to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl LinkGraph {
    /// Build a graph from pre-split `(source, target)` pairs, in input order.
    #[must_use]
    pub fn from_edges<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut graph = DiGraph::<String, ()>::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        for (source, target) in pairs {
            let s = intern(&mut graph, &mut node_map, source);
            let t = intern(&mut graph, &mut node_map, target);
            // Parallel edges are intentional; no contains_edge guard here.
            graph.add_edge(s, t, ());
        }

        Self { graph, node_map }
    }

    /// Build a graph from raw link lines, one `source target` pair per line.
    ///
    /// Lines are split on ASCII/Unicode whitespace. The whole input is
    /// rejected on the first bad line; no partial graph is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::MalformedLine`] (with a 1-based line number) if
    /// a line does not split into exactly two tokens.
    #[instrument(skip(lines))]
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pairs = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let tokens: Vec<&str> = line.as_ref().split_whitespace().collect();
            if let [source, target] = tokens[..] {
                pairs.push((source.to_string(), target.to_string()));
            } else {
                return Err(RankError::MalformedLine {
                    line: idx + 1,
                    tokens: tokens.len(),
                });
            }
        }

        let built = Self::from_edges(pairs);
        debug!(
            sources = built.source_count(),
            edges = built.edge_count(),
            dangling = built.node_count() - built.source_count(),
            "link graph built"
        );
        Ok(built)
    }

    /// Total number of interned nodes, dangling nodes included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of source nodes (out-degree ≥ 1). This is the "node count"
    /// reported to users: dangling targets are not counted.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.graph
            .node_indices()
            .filter(|&idx| self.is_source(idx))
            .count()
    }

    /// Total number of edges, duplicates counted.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the node has at least one out-edge.
    #[must_use]
    pub fn is_source(&self, idx: NodeIndex) -> bool {
        self.graph.edges(idx).next().is_some()
    }

    /// Out-degree of a node, parallel edges counted.
    #[must_use]
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }

    /// Source node indices in insertion order.
    ///
    /// The order carries no meaning, but it is stable within a run, which
    /// keeps the distribution estimator deterministic and makes rank ties
    /// break the same way every time.
    #[must_use]
    pub fn sources(&self) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&idx| self.is_source(idx))
            .collect()
    }

    /// Ordered out-edge target lists, indexed by node.
    ///
    /// Targets appear in input order with duplicates preserved, so indexing
    /// uniformly into a list reproduces the multiplicity bias. Dangling
    /// nodes get an empty list. Built in one O(V + E) pass so the walk loop
    /// never touches petgraph's edge iterators.
    #[must_use]
    pub fn out_targets(&self) -> Vec<Vec<NodeIndex>> {
        let mut adjacency = vec![Vec::new(); self.graph.node_count()];
        for edge in self.graph.raw_edges() {
            adjacency[edge.source().index()].push(edge.target());
        }
        adjacency
    }

    /// Ordered out-edge target labels for a node label.
    ///
    /// Returns an empty list for dangling or unknown labels, matching the
    /// "no outgoing links" reading of both.
    #[must_use]
    pub fn out_links(&self, label: &str) -> Vec<&str> {
        self.node_index(label).map_or_else(Vec::new, |idx| {
            let mut targets: Vec<&str> = self
                .graph
                .edges(idx)
                .map(|edge| self.graph[edge.target()].as_str())
                .collect();
            // petgraph iterates out-edges most-recent first; restore input order.
            targets.reverse();
            targets
        })
    }

    /// Look up the `NodeIndex` for a label.
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    /// Return the label for a node.
    #[must_use]
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }
}

/// Intern a label, reusing the existing node when the label was seen before.
fn intern(
    graph: &mut DiGraph<String, ()>,
    node_map: &mut HashMap<String, NodeIndex>,
    label: String,
) -> NodeIndex {
    match node_map.get(&label) {
        Some(&idx) => idx,
        None => {
            let idx = graph.add_node(label.clone());
            node_map.insert(label, idx);
            idx
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
