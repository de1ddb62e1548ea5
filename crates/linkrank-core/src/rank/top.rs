//! Top-N presentation view over a rank vector.

use crate::graph::LinkGraph;
use crate::rank::RankVector;

/// Return the `n` highest-scored nodes as `(label, score)` pairs.
///
/// Sorted descending by score with a stable sort, so equal scores keep node
/// insertion order. Asking for more entries than exist returns the whole
/// vector sorted; this never errors.
#[must_use]
pub fn top_n(graph: &LinkGraph, ranks: &RankVector, n: usize) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = ranks
        .labeled(graph)
        .map(|(label, score)| (label.to_string(), score))
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(n);
    entries
}
