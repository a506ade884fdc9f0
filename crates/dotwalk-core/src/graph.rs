//! Graph data model: vertex arena, adjacency lists, dense weight matrix.
//!
//! Vertices live in a fixed arena in sorted-label order and are referenced
//! by stable `VertexId` indices, so predecessor links and the priority
//! queue's back-pointers never form ownership cycles.

use std::collections::HashMap;

use crate::error::{Result, WalkError};
use crate::vertex::{Color, Distance, Vertex, VertexId};

/// An edge in a graph description: an ordered pair of endpoint labels with
/// an optional weight. Unweighted edges are stored with weight 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Option<i64>,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        EdgeSpec {
            from: from.into(),
            to: to.into(),
            weight: None,
        }
    }

    pub fn weighted(from: impl Into<String>, to: impl Into<String>, weight: i64) -> Self {
        EdgeSpec {
            from: from.into(),
            to: to.into(),
            weight: Some(weight),
        }
    }
}

impl From<(&str, &str)> for EdgeSpec {
    fn from((from, to): (&str, &str)) -> Self {
        EdgeSpec::new(from, to)
    }
}

impl From<(&str, &str, i64)> for EdgeSpec {
    fn from((from, to, weight): (&str, &str, i64)) -> Self {
        EdgeSpec::weighted(from, to, weight)
    }
}

/// A labeled graph, directed or undirected, with optional edge weights.
///
/// Built once and reused across algorithm invocations; every algorithm
/// resets the vertex attributes it depends on before starting, so two
/// algorithms must not run against the same graph concurrently.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    adj: Vec<Vec<VertexId>>,
    weight: Vec<Vec<Option<i64>>>,
    directed: bool,
    weighted: bool,
}

impl Graph {
    /// Build a graph from vertex labels and edge descriptions.
    ///
    /// Vertices are created in sorted-label order, which makes iteration
    /// deterministic when several traversal orders would otherwise be valid.
    /// A duplicate edge between the same ordered pair overwrites the prior
    /// weight; for undirected graphs every edge is mirrored.
    pub fn build<L, E>(labels: L, edges: E, directed: bool) -> Result<Graph>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<EdgeSpec>,
    {
        let mut labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        labels.sort();

        let mut vertices = Vec::with_capacity(labels.len());
        let mut index = HashMap::with_capacity(labels.len());
        for label in labels {
            let id = VertexId(vertices.len());
            if index.insert(label.clone(), id).is_some() {
                return Err(WalkError::DuplicateLabel { label });
            }
            vertices.push(Vertex::new(label));
        }

        let n = vertices.len();
        let mut graph = Graph {
            vertices,
            index,
            adj: vec![Vec::new(); n],
            weight: vec![vec![None; n]; n],
            directed,
            weighted: false,
        };

        for edge in edges {
            graph.add_edge(edge.into())?;
        }

        // Ascending id order is ascending label order, which gives every
        // traversal a deterministic neighbor scan.
        for list in &mut graph.adj {
            list.sort_unstable();
        }

        Ok(graph)
    }

    fn add_edge(&mut self, edge: EdgeSpec) -> Result<()> {
        let u = self.resolve(&edge.from)?;
        let v = self.resolve(&edge.to)?;
        if edge.weight.is_some() {
            self.weighted = true;
        }
        let w = edge.weight.unwrap_or(1);

        if self.weight[u.0][v.0].is_none() {
            self.adj[u.0].push(v);
        }
        self.weight[u.0][v.0] = Some(w);

        if !self.directed {
            if self.weight[v.0][u.0].is_none() {
                self.adj[v.0].push(u);
            }
            self.weight[v.0][u.0] = Some(w);
        }
        Ok(())
    }

    /// Look up a vertex by label.
    pub fn resolve(&self, label: &str) -> Result<VertexId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| WalkError::unknown_label(label))
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.0]
    }

    pub fn label(&self, id: VertexId) -> &str {
        &self.vertices[id.0].label
    }

    /// All vertex ids, in ascending label order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Neighbors of a vertex, in ascending label order.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        &self.adj[id.0]
    }

    /// Weight of the edge (u, v), if the edge exists.
    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<i64> {
        self.weight[u.0][v.0]
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn weighted(&self) -> bool {
        self.weighted
    }

    /// Every edge once: all ordered pairs for a directed graph, each
    /// mirrored pair once (smaller endpoint first) for an undirected one.
    pub fn unique_edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::new();
        for u in self.ids() {
            for &v in self.neighbors(u) {
                // a predecessor tree keeps only one direction of a mirrored
                // pair, so an asymmetric entry counts regardless of order
                if self.directed || u <= v || !self.adj[v.0].contains(&u) {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    /// Whether (u, v) lies on the current predecessor tree.
    pub fn is_tree_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.vertex(v).predecessor == Some(u)
            || (!self.directed && self.vertex(u).predecessor == Some(v))
    }

    /// Reset every vertex to its unvisited state.
    pub fn reset(&mut self) {
        for v in &mut self.vertices {
            v.color = Color::White;
            v.distance = Distance::Infinity;
            v.predecessor = None;
            v.discovery = 0;
            v.finish = 0;
        }
    }

    /// Reset colors, distances, and predecessors for a single-source path
    /// computation: every distance becomes the mode's sentinel, except the
    /// source which becomes 0.
    pub fn init_single_source(&mut self, source: VertexId, sentinel: Distance) {
        for v in &mut self.vertices {
            v.color = Color::White;
            v.distance = sentinel;
            v.predecessor = None;
        }
        self.vertices[source.0].distance = Distance::ZERO;
    }

    /// A copy of this graph retaining only predecessor-tree edges, with all
    /// colors reset. Used for rendering the subgraph an algorithm produced.
    pub fn predecessor_tree(&self) -> Graph {
        let mut tree = self.clone();
        for u in 0..tree.adj.len() {
            let (kept, dropped): (Vec<VertexId>, Vec<VertexId>) = tree.adj[u]
                .iter()
                .copied()
                .partition(|&v| tree.vertices[v.0].predecessor == Some(VertexId(u)));
            for v in dropped {
                tree.weight[u][v.0] = None;
            }
            tree.adj[u] = kept;
        }
        for v in &mut tree.vertices {
            v.color = Color::White;
        }
        tree
    }
}
