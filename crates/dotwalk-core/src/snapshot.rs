//! Per-step state export for visualization.
//!
//! Algorithms report [`StepEvent`]s to a caller-supplied [`StepObserver`];
//! the [`Recorder`] observer captures a full [`GraphSnapshot`] per
//! visualization step, which renderers turn into one diagram each.

use serde::Serialize;

use crate::graph::Graph;
use crate::vertex::{Color, Distance, VertexId};

/// The family of algorithms that produced a snapshot, which determines the
/// per-vertex annotation: distances for the path searches, discovery/finish
/// timestamps for the depth-first walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Walk {
    Bfs,
    Dfs,
    Dijkstra,
    DagSp,
}

fn unstamped(time: &u32) -> bool {
    *time == 0
}

/// One vertex's exported state. Timestamps are only stamped by the
/// depth-first walks, so they are omitted from the export while zero.
#[derive(Debug, Clone, Serialize)]
pub struct VertexSnapshot {
    pub label: String,
    pub color: Color,
    pub distance: Distance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<String>,
    #[serde(skip_serializing_if = "unstamped")]
    pub discovery: u32,
    #[serde(skip_serializing_if = "unstamped")]
    pub finish: u32,
}

/// One edge's exported state. `weight` is absent for unweighted graphs.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeSnapshot {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    /// Whether the edge lies on the current predecessor tree; renderers
    /// bold these.
    pub on_tree: bool,
}

/// A full copy of the visible graph state at one step.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub directed: bool,
    pub weighted: bool,
    pub vertices: Vec<VertexSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
    /// Work-state caption for this step, e.g. the remaining queue contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
}

impl GraphSnapshot {
    pub fn capture(graph: &Graph) -> GraphSnapshot {
        let vertices = graph
            .ids()
            .map(|id| {
                let v = graph.vertex(id);
                VertexSnapshot {
                    label: v.label.clone(),
                    color: v.color,
                    distance: v.distance,
                    predecessor: v.predecessor.map(|p| graph.label(p).to_string()),
                    discovery: v.discovery,
                    finish: v.finish,
                }
            })
            .collect();

        let edges = graph
            .unique_edges()
            .into_iter()
            .map(|(u, v)| EdgeSnapshot {
                from: graph.label(u).to_string(),
                to: graph.label(v).to_string(),
                weight: if graph.weighted() {
                    graph.weight(u, v)
                } else {
                    None
                },
                on_tree: graph.is_tree_edge(u, v),
            })
            .collect();

        GraphSnapshot {
            directed: graph.directed(),
            weighted: graph.weighted(),
            vertices,
            edges,
            legend: None,
        }
    }
}

/// Trace points reported by the algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// A vertex turned GRAY (entered the frontier)
    Discover { vertex: VertexId },
    /// A vertex turned BLACK (settled). `frontier` describes the pending
    /// work at that moment (queue or sorted-list contents) for captioning.
    Finish {
        vertex: VertexId,
        frontier: Option<String>,
    },
    /// One candidate edge was examined
    Relax {
        from: VertexId,
        to: VertexId,
        improved: bool,
    },
    /// A vertex was extracted from the priority queue
    Extract { vertex: VertexId },
}

/// Callback invoked at every trace point, with the graph state readable at
/// that moment. Replaces any process-wide verbosity toggle: the caller
/// decides per invocation what to observe.
pub trait StepObserver {
    fn on_step(&mut self, graph: &Graph, event: StepEvent);
}

/// Observer that ignores every event, for the algorithmic hot path.
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&mut self, _graph: &Graph, _event: StepEvent) {}
}

/// Observer that captures one snapshot per visualization step.
///
/// Depth-first walks snapshot on both discovery and finish (the timestamps
/// advance on both transitions); the other walks snapshot when a vertex
/// settles.
pub struct Recorder {
    walk: Walk,
    steps: Vec<GraphSnapshot>,
}

impl Recorder {
    pub fn new(walk: Walk) -> Self {
        Recorder {
            walk,
            steps: Vec::new(),
        }
    }

    pub fn walk(&self) -> Walk {
        self.walk
    }

    pub fn steps(&self) -> &[GraphSnapshot] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<GraphSnapshot> {
        self.steps
    }
}

impl StepObserver for Recorder {
    fn on_step(&mut self, graph: &Graph, event: StepEvent) {
        match event {
            StepEvent::Finish { frontier, .. } => {
                let mut snapshot = GraphSnapshot::capture(graph);
                snapshot.legend = frontier;
                self.steps.push(snapshot);
            }
            StepEvent::Discover { .. } if self.walk == Walk::Dfs => {
                self.steps.push(GraphSnapshot::capture(graph));
            }
            _ => {}
        }
    }
}
