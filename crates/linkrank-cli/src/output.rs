//! Shared output layer for human/JSON parity.
//!
//! Human mode keeps stdout pipeable: the ranking rows (`percent<TAB>node`)
//! are the only stdout payload, while the stats line, the `Top N pages:`
//! heading, and the timing report go to stderr. JSON mode emits a single
//! self-contained object on stdout and nothing on stderr.

use linkrank_core::GraphStats;
use serde::Serialize;
use std::io::{self, Write};

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text, ranking rows on stdout, framing on stderr.
    Human,
    /// Machine-readable JSON (one object per run).
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// One row of the ranking table.
#[derive(Debug, Serialize)]
pub struct RankEntry {
    pub node: String,
    pub score: f64,
}

/// Everything a single run produces, in one serializable record.
#[derive(Debug, Serialize)]
pub struct RankReport {
    pub method: &'static str,
    pub stats: GraphStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub elapsed_seconds: f64,
    pub requested: usize,
    pub top: Vec<RankEntry>,
}

/// Print the graph stats line before estimation starts (human mode only;
/// JSON mode folds the stats into the final report object).
pub fn print_stats(mode: OutputMode, stats: &GraphStats) -> io::Result<()> {
    if mode.is_json() {
        return Ok(());
    }
    let stderr = io::stderr();
    let mut err = stderr.lock();
    writeln!(
        err,
        "The number of nodes is {} and the number of edges is {}",
        stats.source_count, stats.edge_count
    )
}

/// Render the finished run to stdout/stderr in the requested mode.
pub fn render(mode: OutputMode, report: &RankReport) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
        OutputMode::Human => {
            let stderr = io::stderr();
            let mut err = stderr.lock();
            writeln!(err, "Top {} pages:", report.requested)?;
            render_rows(&mut out, &report.top)?;
            writeln!(
                err,
                "Calculation took {:.2} seconds.",
                report.elapsed_seconds
            )?;
        }
    }
    Ok(())
}

/// Write ranking rows as `percent<TAB>node`, two decimals.
fn render_rows(w: &mut dyn Write, entries: &[RankEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(w, "{:.2}\t{}", 100.0 * entry.score, entry.node)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_render_as_tab_separated_percentages() {
        let entries = vec![
            RankEntry {
                node: "hub".to_string(),
                score: 0.5,
            },
            RankEntry {
                node: "spoke".to_string(),
                score: 0.125,
            },
        ];
        let mut buf = Vec::new();
        render_rows(&mut buf, &entries).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text, "50.00\thub\n12.50\tspoke\n");
    }

    #[test]
    fn report_serializes_without_absent_seed() {
        let report = RankReport {
            method: "distribution",
            stats: GraphStats {
                source_count: 2,
                edge_count: 3,
                dangling_count: 1,
                max_out_degree: 2,
            },
            seed: None,
            elapsed_seconds: 0.25,
            requested: 20,
            top: vec![],
        };
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["method"], "distribution");
        assert_eq!(json["stats"]["edge_count"], 3);
        assert!(json.get("seed").is_none());
    }

    #[test]
    fn output_mode_is_json() {
        assert!(OutputMode::Json.is_json());
        assert!(!OutputMode::Human.is_json());
    }
}
