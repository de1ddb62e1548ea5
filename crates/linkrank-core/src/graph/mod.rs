//! Directed link graph for rank estimation.
//!
//! # Overview
//!
//! This module builds a petgraph-based directed graph from raw
//! `(source, target)` link pairs and exposes the structure both estimators
//! consume. The graph is built once per run and is read-only afterwards.
//!
//! ## Pipeline
//!
//! ```text
//! link lines / (source, target) pairs
//!        ↓  build::LinkGraph::from_lines() / from_edges()
//! LinkGraph (DiGraph, parallel edges and self-loops preserved)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (source count, edge count, dangling count, …)
//! ```
//!
//! ## Sources and dangling nodes
//!
//! Every identifier seen in the input is interned as a node, but only nodes
//! with at least one out-edge are **sources**: the nodes a walk can start
//! from and the nodes that hold mass at initialization. A node that only
//! ever appears as a target is **dangling**: walks terminate on it and
//! probability mass that reaches it leaks out of the system.

pub mod build;
pub mod stats;

pub use build::LinkGraph;
pub use stats::GraphStats;
