//! Typed errors for graph construction and ranking.

use thiserror::Error;

/// Errors surfaced by graph construction and the ranking estimators.
///
/// Both variants are fatal to the operation that raised them: a malformed
/// line aborts the build with no partial graph, and an empty graph is
/// rejected before either estimator divides by the node count.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    /// An input line did not split into exactly two whitespace-separated
    /// tokens. `line` is 1-based.
    #[error("line {line}: expected `source target`, found {tokens} token(s)")]
    MalformedLine { line: usize, tokens: usize },

    /// The graph has no source nodes, so there is nothing to start a walk
    /// from and no node count to divide by.
    #[error("graph has no linked nodes to rank")]
    EmptyGraph,
}

pub type Result<T> = std::result::Result<T, RankError>;
