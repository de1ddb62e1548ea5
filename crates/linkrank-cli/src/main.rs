#![forbid(unsafe_code)]

mod load;
mod output;

use clap::{Parser, ValueEnum};
use linkrank_core::{
    DistributionConfig, GraphStats, LinkGraph, WalkConfig, distribution_rank, stochastic_rank,
    top_n,
};
use output::{OutputMode, RankEntry, RankReport};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimates page ranks from link information",
    long_about = None
)]
struct Cli {
    /// Edge-list file to process (`source target` per line); stdin when
    /// omitted.
    datafile: Option<PathBuf>,

    /// Selected estimation method.
    #[arg(short, long, value_enum, default_value_t = Method::Stochastic)]
    method: Method,

    /// Number of random-walk repetitions (stochastic only).
    #[arg(short, long, default_value_t = 1_000_000)]
    repeats: u64,

    /// Number of steps a walker takes, or propagation iterations.
    #[arg(short, long, default_value_t = 100)]
    steps: u32,

    /// Number of results shown.
    #[arg(short, long, default_value_t = 20)]
    number: usize,

    /// Seed for reproducible stochastic runs; entropy-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

/// The two rank estimation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Monte-Carlo random walks.
    Stochastic,
    /// Deterministic power iteration.
    Distribution,
}

impl Method {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Stochastic => "stochastic",
            Self::Distribution => "distribution",
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LINKRANK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "linkrank=debug,info"
        } else {
            "linkrank=info,warn"
        })
    });

    let format = env::var("LINKRANK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mode = cli.output_mode();

    let lines = load::read_lines(cli.datafile.as_deref())?;
    let graph = LinkGraph::from_lines(lines.iter())?;
    let stats = GraphStats::from_graph(&graph);
    output::print_stats(mode, &stats)?;

    let started = Instant::now();
    let ranks = match cli.method {
        Method::Stochastic => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let config = WalkConfig {
                repeats: cli.repeats,
                steps: cli.steps,
            };
            stochastic_rank(&graph, &config, &mut rng)?
        }
        Method::Distribution => {
            let config = DistributionConfig { steps: cli.steps };
            distribution_rank(&graph, &config)?
        }
    };
    let elapsed = started.elapsed();
    debug!(
        method = cli.method.as_str(),
        elapsed_ms = elapsed.as_millis(),
        "estimation finished"
    );

    let top = top_n(&graph, &ranks, cli.number)
        .into_iter()
        .map(|(node, score)| RankEntry { node, score })
        .collect();

    let report = RankReport {
        method: cli.method.as_str(),
        stats,
        seed: cli.seed,
        elapsed_seconds: elapsed.as_secs_f64(),
        requested: cli.number,
        top,
    };
    output::render(mode, &report)
}
