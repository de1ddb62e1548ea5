//! Input loading: edge-list lines from a file or stdin.

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read every line of the datafile, or of stdin when no path was given.
///
/// Lines are returned verbatim; tokenizing and validation happen in the
/// graph builder so malformed lines get reported with their line number.
pub fn read_lines(path: Option<&Path>) -> anyhow::Result<Vec<String>> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            collect(BufReader::new(file))
                .with_context(|| format!("cannot read {}", path.display()))
        }
        None => collect(io::stdin().lock()).context("cannot read stdin"),
    }
}

fn collect(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
