//! Load a DOT graph, run the selected algorithm, write per-step diagrams,
//! and print a result summary.

use std::fs;

use serde::Serialize;
use tracing::debug;

use dotwalk_core::dot;
use dotwalk_core::error::{Result, WalkError};
use dotwalk_core::graph::Graph;
use dotwalk_core::paths::{self, CriticalPath, PathMode};
use dotwalk_core::snapshot::{GraphSnapshot, Recorder, VertexSnapshot, Walk};
use dotwalk_core::walk;

use crate::cli::{Algorithm, Cli, OutputFormat};

/// Result summary printed after a run.
#[derive(Debug, Serialize)]
struct RunReport {
    algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    /// Topological order, for `topo` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    critical_path: Option<CriticalPath>,
    vertices: Vec<VertexSnapshot>,
    diagrams_written: usize,
}

pub fn execute(cli: &Cli) -> Result<()> {
    let input = fs::read_to_string(&cli.dotfile)?;
    let mut graph = dot::from_dot(&input)?;
    debug!(
        vertices = graph.len(),
        directed = graph.directed(),
        weighted = graph.weighted(),
        "graph loaded"
    );

    let walk_kind = match cli.algorithm {
        Algorithm::Bfs => Walk::Bfs,
        Algorithm::Dfs | Algorithm::Topo => Walk::Dfs,
        Algorithm::Dijkstra => Walk::Dijkstra,
        Algorithm::DagShortestPath | Algorithm::DagLongestPath | Algorithm::CriticalPath => {
            Walk::DagSp
        }
    };
    let mut recorder = Recorder::new(walk_kind);

    let mut order = None;
    let mut critical_path = None;
    match cli.algorithm {
        Algorithm::Bfs => {
            walk::breadth_first_observed(&mut graph, source(cli)?, &mut recorder)?;
        }
        Algorithm::Dfs => walk::depth_first_observed(&mut graph, &mut recorder),
        Algorithm::Topo => {
            let ids = walk::topo_sort_observed(&mut graph, &mut recorder)?;
            order = Some(
                ids.into_iter()
                    .map(|id| graph.label(id).to_string())
                    .collect(),
            );
        }
        Algorithm::DagShortestPath => {
            paths::dag_path_observed(&mut graph, source(cli)?, PathMode::Shortest, &mut recorder)?;
        }
        Algorithm::DagLongestPath => {
            paths::dag_path_observed(&mut graph, source(cli)?, PathMode::Longest, &mut recorder)?;
        }
        Algorithm::Dijkstra => {
            paths::dijkstra_observed(&mut graph, source(cli)?, &mut recorder)?;
        }
        Algorithm::CriticalPath => {
            critical_path = Some(paths::critical_path_observed(
                &mut graph,
                source(cli)?,
                &mut recorder,
            )?);
        }
    }

    let diagrams_written = write_diagrams(cli, &graph, &recorder)?;

    let report = RunReport {
        algorithm: cli.algorithm,
        source: cli.source.clone(),
        order,
        critical_path,
        vertices: GraphSnapshot::capture(&graph).vertices,
        diagrams_written,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => print_human(cli, &report),
    }
    Ok(())
}

fn source(cli: &Cli) -> Result<&str> {
    cli.source.as_deref().ok_or_else(|| {
        WalkError::UsageError("--source is required for this algorithm".to_string())
    })
}

/// Write one numbered .dot file per recorded step, captioned with the
/// recorded work state (queue or sorted-list contents) when the walk
/// reported one, plus a final diagram of the predecessor subgraph (skipped
/// for blank exercise templates).
fn write_diagrams(cli: &Cli, graph: &Graph, recorder: &Recorder) -> Result<usize> {
    let Some(prefix) = cli.prefix.as_deref() else {
        return Ok(0);
    };

    let mut written = 0;
    for (step, snapshot) in recorder.steps().iter().enumerate() {
        let fallback = format!("step {:02}", step);
        let legend = snapshot.legend.as_deref().unwrap_or(&fallback);
        let rendered = dot::to_dot(snapshot, recorder.walk(), Some(legend), cli.blank);
        fs::write(format!("{}{:02}.dot", prefix, step), rendered)?;
        written += 1;
    }

    if !cli.blank {
        let tree = graph.predecessor_tree();
        let rendered = dot::to_dot(
            &GraphSnapshot::capture(&tree),
            recorder.walk(),
            Some("resulting subgraph"),
            false,
        );
        fs::write(format!("{}{:02}.dot", prefix, written), rendered)?;
        written += 1;
    }

    debug!(written, prefix, "diagrams");
    Ok(written)
}

fn print_human(cli: &Cli, report: &RunReport) {
    if let Some(order) = &report.order {
        println!("order: {}", order.join(" "));
    } else if let Some(cp) = &report.critical_path {
        println!(
            "critical path: {} (duration {})",
            cp.path.join(" -> "),
            cp.duration
        );
    } else if report.algorithm == Algorithm::Dfs {
        for v in &report.vertices {
            println!("{}: {}/{}", v.label, v.discovery, v.finish);
        }
    } else {
        for v in &report.vertices {
            match &v.predecessor {
                Some(p) => println!("{}: {} (via {})", v.label, v.distance, p),
                None => println!("{}: {}", v.label, v.distance),
            }
        }
    }

    if !cli.quiet && report.diagrams_written > 0 {
        println!("wrote {} diagrams", report.diagrams_written);
    }
}
