use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mst_crosscheck::report::{RunReport, TimedOutcome};
use mst_crosscheck::validate::Validation;
use mst_crosscheck::{instrument, kruskal, loader, prim, validate};

/// Computes the Euclidean minimum spanning tree (or forest) of a point
/// graph with both Kruskal and Prim, and cross-checks that the two agree.
///
/// Prints one CSV line on stdout:
/// `V,E,costPrim,timePrim,costKruskal,timeKruskal,isConnected,validationPassed`
#[derive(Parser)]
#[command(name = "mst-crosscheck")]
struct Args {
    /// Node CSV: `id,x,y` rows after a header, ids 1-indexed
    nodes: PathBuf,
    /// Edge CSV: `source,dest` rows after a header, ids 1-indexed
    edges: PathBuf,
    /// Absolute weight tolerance for the cross-check
    #[arg(long, default_value_t = validate::DEFAULT_TOLERANCE)]
    tolerance: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (graph, summary) = match loader::load_graph(&args.nodes, &args.edges) {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::error!(%err, "failed to build the graph");
            return ExitCode::FAILURE;
        }
    };
    if let Some(memory) = instrument::memory_snapshot() {
        tracing::debug!(
            total_kb = memory.total_kb,
            available_kb = memory.available_kb,
            "host memory before the run"
        );
    }

    // Both engines are pure over the shared graph, so they run side by side,
    // each timed on its own.
    let ((prim_outcome, prim_seconds), (kruskal_outcome, kruskal_seconds)) = rayon::join(
        || instrument::timed(|| prim::run(&graph)),
        || instrument::timed(|| kruskal::run(&graph)),
    );

    let validation = validate::validate(&prim_outcome, &kruskal_outcome, args.tolerance);
    match validation {
        Validation::Pass => {}
        Validation::ConnectivityMismatch { prim, kruskal } => {
            tracing::error!(prim, kruskal, "engines disagree on connectivity");
        }
        Validation::WeightMismatch { prim, kruskal, difference } => {
            tracing::error!(prim, kruskal, difference, "engine weights differ beyond tolerance");
        }
    }
    if summary.unreachable_edges > 0 {
        tracing::debug!(
            count = summary.unreachable_edges,
            "run included edges to missing vertices"
        );
    }

    let report = RunReport {
        num_vertices: graph.num_vertices(),
        num_edges: graph.num_edges(),
        prim: TimedOutcome { outcome: prim_outcome, seconds: prim_seconds },
        kruskal: TimedOutcome { outcome: kruskal_outcome, seconds: kruskal_seconds },
        validation,
    };
    println!("{}", report.csv_line());

    if report.validation.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
