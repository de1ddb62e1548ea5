#![forbid(unsafe_code)]
//! linkrank-core library.
//!
//! Graph store and ranking estimators for directed link graphs: a
//! Monte-Carlo random-walk estimator and a deterministic power-iteration
//! estimator, plus the top-N view over either one's output.
//!
//! # Conventions
//!
//! - **Errors**: typed [`error::RankError`] inside the crate; callers at
//!   the binary boundary wrap with `anyhow`.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod error;
pub mod graph;
pub mod rank;

pub use error::{RankError, Result};
pub use graph::{GraphStats, LinkGraph};
pub use rank::{
    RankVector,
    distribution::{DistributionConfig, distribution_rank},
    stochastic::{WalkConfig, stochastic_rank},
    top::top_n,
};
