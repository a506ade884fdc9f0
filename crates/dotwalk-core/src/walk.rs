//! Traversal engine: breadth-first, depth-first, topological sort.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{Result, WalkError};
use crate::graph::Graph;
use crate::snapshot::{NullObserver, StepEvent, StepObserver};
use crate::vertex::{Color, Distance, VertexId};

/// Breadth-first traversal from a source vertex.
///
/// Afterwards every vertex reachable from the source carries the edge count
/// of a shortest path in `distance` and a shortest-path-tree link in
/// `predecessor`; unreached vertices keep the infinity sentinel.
pub fn breadth_first(graph: &mut Graph, source: &str) -> Result<()> {
    breadth_first_observed(graph, source, &mut NullObserver)
}

#[tracing::instrument(skip(graph, observer), fields(source = %source))]
pub fn breadth_first_observed(
    graph: &mut Graph,
    source: &str,
    observer: &mut dyn StepObserver,
) -> Result<()> {
    let s = graph.resolve(source)?;
    graph.init_single_source(s, Distance::Infinity);
    graph.vertex_mut(s).color = Color::Gray;
    observer.on_step(graph, StepEvent::Discover { vertex: s });

    let mut frontier = VecDeque::new();
    frontier.push_back(s);

    while let Some(u) = frontier.pop_front() {
        let u_distance = graph.vertex(u).distance;
        for v in graph.neighbors(u).to_vec() {
            trace!(vertex = graph.label(v), "visit");
            if graph.vertex(v).color == Color::White {
                let record = graph.vertex_mut(v);
                record.color = Color::Gray;
                record.distance = u_distance.plus(1);
                record.predecessor = Some(u);
                observer.on_step(graph, StepEvent::Discover { vertex: v });
                frontier.push_back(v);
            }
        }
        graph.vertex_mut(u).color = Color::Black;
        debug!(vertex = graph.label(u), distance = %graph.vertex(u).distance, "settle");
        let pending = frontier
            .iter()
            .map(|&v| graph.label(v))
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

/// Depth-first traversal of every vertex, in ascending label order, yielding
/// a depth-first forest with discovery/finish timestamps.
///
/// Back edges are not reported; cycle diagnosis belongs to [`topo_sort`].
pub fn depth_first(graph: &mut Graph) {
    depth_first_observed(graph, &mut NullObserver);
}

#[tracing::instrument(skip_all)]
pub fn depth_first_observed(graph: &mut Graph, observer: &mut dyn StepObserver) {
    graph.reset();
    let mut time = 0u32;
    for u in graph.ids().collect::<Vec<_>>() {
        if graph.vertex(u).color == Color::White {
            dfs_visit(graph, u, &mut time, observer);
        }
    }
}

fn dfs_visit(graph: &mut Graph, u: VertexId, time: &mut u32, observer: &mut dyn StepObserver) {
    *time += 1;
    let record = graph.vertex_mut(u);
    record.discovery = *time;
    record.color = Color::Gray;
    trace!(vertex = graph.label(u), time = *time, "discover");
    observer.on_step(graph, StepEvent::Discover { vertex: u });

    for v in graph.neighbors(u).to_vec() {
        if graph.vertex(v).color == Color::White {
            graph.vertex_mut(v).predecessor = Some(u);
            dfs_visit(graph, v, time, observer);
        }
    }

    *time += 1;
    let record = graph.vertex_mut(u);
    record.color = Color::Black;
    record.finish = *time;
    trace!(vertex = graph.label(u), time = *time, "finish");
    observer.on_step(graph, StepEvent::Finish { vertex: u, frontier: None });
}

/// Topological sort via depth-first traversal, prepending each vertex to
/// the order as it finishes.
///
/// Fails with `CyclicGraph` when the visit observes an edge into a GRAY
/// vertex, instead of silently returning an order that no longer means
/// anything.
pub fn topo_sort(graph: &mut Graph) -> Result<Vec<VertexId>> {
    topo_sort_observed(graph, &mut NullObserver)
}

#[tracing::instrument(skip_all)]
pub fn topo_sort_observed(
    graph: &mut Graph,
    observer: &mut dyn StepObserver,
) -> Result<Vec<VertexId>> {
    graph.reset();
    let mut time = 0u32;
    let mut order = VecDeque::with_capacity(graph.len());
    for u in graph.ids().collect::<Vec<_>>() {
        if graph.vertex(u).color == Color::White {
            topo_visit(graph, u, &mut time, &mut order, observer)?;
        }
    }
    Ok(order.into())
}

fn topo_visit(
    graph: &mut Graph,
    u: VertexId,
    time: &mut u32,
    order: &mut VecDeque<VertexId>,
    observer: &mut dyn StepObserver,
) -> Result<()> {
    *time += 1;
    let record = graph.vertex_mut(u);
    record.discovery = *time;
    record.color = Color::Gray;
    observer.on_step(graph, StepEvent::Discover { vertex: u });

    for v in graph.neighbors(u).to_vec() {
        match graph.vertex(v).color {
            Color::White => {
                graph.vertex_mut(v).predecessor = Some(u);
                topo_visit(graph, v, time, order, observer)?;
            }
            Color::Gray => {
                return Err(WalkError::CyclicGraph {
                    from: graph.label(u).to_string(),
                    to: graph.label(v).to_string(),
                });
            }
            Color::Black => {}
        }
    }

    *time += 1;
    let record = graph.vertex_mut(u);
    record.color = Color::Black;
    record.finish = *time;
    order.push_front(u);
    let sorted = order
        .iter()
        .map(|&v| graph.label(v))
        .collect::<Vec<_>>()
        .join(", ");
    observer.on_step(
        graph,
        StepEvent::Finish {
            vertex: u,
            frontier: Some(format!("S=[{}]", sorted)),
        },
    );
    Ok(())
}
