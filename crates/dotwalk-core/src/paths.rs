//! Shortest- and longest-path engine: relax-based DAG search, Dijkstra,
//! and the critical-path overlay for activity-on-edge networks.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Result, WalkError};
use crate::graph::Graph;
use crate::heap::{Handle, IndexedMinHeap};
use crate::snapshot::{NullObserver, StepEvent, StepObserver};
use crate::vertex::{Color, Distance, VertexId};
use crate::walk;

/// Search direction of the relax engine.
///
/// The mode is a value, not a type: it fixes the sentinel distance for
/// non-source vertices and the comparator deciding whether a candidate
/// distance improves the current one. One engine serves both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
    Shortest,
    Longest,
}

impl PathMode {
    /// Initial distance of every non-source vertex.
    pub fn sentinel(self) -> Distance {
        match self {
            PathMode::Shortest => Distance::Infinity,
            PathMode::Longest => Distance::NegInfinity,
        }
    }

    /// Whether `candidate` is better than `current` in this direction.
    pub fn improves(self, candidate: Distance, current: Distance) -> bool {
        match self {
            PathMode::Shortest => candidate < current,
            PathMode::Longest => candidate > current,
        }
    }
}

/// Consider the edge (u, v) and update v's distance and predecessor when
/// the path through u is better. The sentinel absorbs addition, so relaxing
/// out of an unreached vertex never improves anything.
fn relax(
    graph: &mut Graph,
    u: VertexId,
    v: VertexId,
    mode: PathMode,
    observer: &mut dyn StepObserver,
) -> bool {
    let Some(weight) = graph.weight(u, v) else {
        return false;
    };
    let candidate = graph.vertex(u).distance.plus(weight);
    let improved = mode.improves(candidate, graph.vertex(v).distance);
    if improved {
        trace!(
            from = graph.label(u),
            to = graph.label(v),
            distance = %candidate,
            "relax"
        );
        let record = graph.vertex_mut(v);
        record.distance = candidate;
        record.predecessor = Some(u);
    }
    observer.on_step(graph, StepEvent::Relax { from: u, to: v, improved });
    improved
}

/// Single-source shortest paths on a directed acyclic graph, O(V+E).
pub fn dag_shortest_path(graph: &mut Graph, source: &str) -> Result<()> {
    dag_path_observed(graph, source, PathMode::Shortest, &mut NullObserver)
}

/// Single-source longest paths on a directed acyclic graph.
pub fn dag_longest_path(graph: &mut Graph, source: &str) -> Result<()> {
    dag_path_observed(graph, source, PathMode::Longest, &mut NullObserver)
}

/// The relax engine behind both DAG searches: relax every outgoing edge of
/// every vertex, in topological order.
///
/// Fails with `CyclicGraph` when no topological order exists, rather than
/// producing distances that mean nothing.
#[tracing::instrument(skip(graph, observer), fields(source = %source, mode = ?mode))]
pub fn dag_path_observed(
    graph: &mut Graph,
    source: &str,
    mode: PathMode,
    observer: &mut dyn StepObserver,
) -> Result<()> {
    let s = graph.resolve(source)?;
    let order = walk::topo_sort(graph)?;
    graph.init_single_source(s, mode.sentinel());

    let sorted = format!(
        "S=[{}]",
        order
            .iter()
            .map(|&u| graph.label(u))
            .collect::<Vec<_>>()
            .join(", ")
    );
    for u in order {
        for v in graph.neighbors(u).to_vec() {
            relax(graph, u, v, mode, observer);
        }
        graph.vertex_mut(u).color = Color::Black;
        debug!(vertex = graph.label(u), distance = %graph.vertex(u).distance, "settle");
        observer.on_step(
            graph,
            StepEvent::Finish {
                vertex: u,
                frontier: Some(sorted.clone()),
            },
        );
    }
    Ok(())
}

/// Single-source shortest paths with non-negative weights, O((V+E) log V).
pub fn dijkstra(graph: &mut Graph, source: &str) -> Result<()> {
    dijkstra_observed(graph, source, &mut NullObserver)
}

/// Dijkstra's algorithm over an indexed min-heap keyed by (distance, id);
/// the id tie-break makes the settle order deterministic.
///
/// An improved neighbor's key is repaired in place through its heap handle,
/// never by rebuilding the queue. Settled (BLACK) neighbors are skipped.
#[tracing::instrument(skip(graph, observer), fields(source = %source))]
pub fn dijkstra_observed(
    graph: &mut Graph,
    source: &str,
    observer: &mut dyn StepObserver,
) -> Result<()> {
    for (u, v) in graph.unique_edges() {
        if let Some(weight) = graph.weight(u, v) {
            if weight < 0 {
                return Err(WalkError::NegativeWeight {
                    from: graph.label(u).to_string(),
                    to: graph.label(v).to_string(),
                    weight,
                });
            }
        }
    }

    let s = graph.resolve(source)?;
    graph.init_single_source(s, Distance::Infinity);

    // Handle(i) is the entry built from VertexId(i): ascending id order is
    // the build order.
    let entries: Vec<((Distance, VertexId), VertexId)> = graph
        .ids()
        .map(|id| ((graph.vertex(id).distance, id), id))
        .collect();
    let mut queue = IndexedMinHeap::build(entries);

    while !queue.is_empty() {
        let (_, u) = queue.extract_min()?;
        graph.vertex_mut(u).color = Color::Black;
        observer.on_step(graph, StepEvent::Extract { vertex: u });

        for v in graph.neighbors(u).to_vec() {
            if graph.vertex(v).color == Color::Black {
                continue;
            }
            if relax(graph, u, v, PathMode::Shortest, observer) {
                let handle = Handle(v.index());
                if queue.is_resident(handle) {
                    queue.decrease_key(handle, (graph.vertex(v).distance, v));
                }
            }
        }
        debug!(vertex = graph.label(u), distance = %graph.vertex(u).distance, "settle");
        let pending = queue
            .sorted()
            .into_iter()
            .map(|(_, v)| graph.label(v).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        observer.on_step(
            graph,
            StepEvent::Finish {
                vertex: u,
                frontier: Some(format!("Q=[{}]", pending)),
            },
        );
    }
    Ok(())
}

/// A critical path through an activity-on-edge network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticalPath {
    /// Vertex labels from the start vertex to the project finish.
    pub path: Vec<String>,
    /// Total project duration, the longest-path distance of the finish.
    pub duration: i64,
}

/// Compute a critical path: run the longest-path search from `source`, pick
/// the vertex with the globally maximum finite distance as the project
/// finish, and walk predecessor links back to the start.
///
/// Vertices not reachable from `source` are not part of the computation;
/// multi-source networks need one call per start vertex.
pub fn critical_path(graph: &mut Graph, source: &str) -> Result<CriticalPath> {
    critical_path_observed(graph, source, &mut NullObserver)
}

pub fn critical_path_observed(
    graph: &mut Graph,
    source: &str,
    observer: &mut dyn StepObserver,
) -> Result<CriticalPath> {
    dag_path_observed(graph, source, PathMode::Longest, observer)?;

    let mut finish = graph.resolve(source)?;
    for id in graph.ids() {
        if graph.vertex(id).distance > graph.vertex(finish).distance {
            finish = id;
        }
    }

    let mut path = Vec::new();
    let mut current = Some(finish);
    while let Some(c) = current {
        path.push(graph.label(c).to_string());
        current = graph.vertex(c).predecessor;
    }
    path.reverse();

    // The source is finite (0), so the maximum is always finite.
    let duration = match graph.vertex(finish).distance {
        Distance::Finite(d) => d,
        _ => 0,
    };
    debug!(duration, finish = graph.label(finish), "critical path");
    Ok(CriticalPath { path, duration })
}

#[cfg(test)]
mod tests;
