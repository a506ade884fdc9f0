//! Per-vertex mutable state: color, distance, predecessor, timestamps.

use std::fmt;

use serde::{Serialize, Serializer};

/// Stable index of a vertex in the graph's arena.
///
/// Vertices are stored in sorted-label order, so ascending `VertexId` order
/// is ascending label order. Predecessor links hold a `VertexId` rather than
/// a reference, which keeps the predecessor forest free of ownership cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Visitation state of a vertex.
///
/// WHITE -> GRAY on first discovery, GRAY -> BLACK when the vertex is
/// finished (all neighbors processed, or extracted as the next-closest
/// vertex). BLACK is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Gray,
    Black,
}

/// Best-known distance of a vertex, with signed infinities standing in for
/// "not yet reached" (positive for shortest-path search, negative for
/// longest-path search).
///
/// The derived ordering places `NegInfinity < Finite(_) < Infinity`, with
/// finite values compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    NegInfinity,
    Finite(i64),
    Infinity,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Add an edge weight to this distance. Infinities absorb the addition,
    /// so relaxing out of an unreached vertex never produces a finite
    /// candidate; finite sums saturate at the numeric bounds.
    pub fn plus(self, weight: i64) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            other => other,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::NegInfinity => write!(f, "-\u{221e}"),
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinity => write!(f, "\u{221e}"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_i64(*d),
            other => serializer.collect_str(other),
        }
    }
}

/// A vertex record.
///
/// All fields except `label` are overwritten by whichever algorithm runs
/// last; each algorithm resets the subset it depends on before starting.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Unique human-friendly label, the vertex's identity.
    pub label: String,
    pub color: Color,
    pub distance: Distance,
    /// Back-link into the predecessor forest, set only to already-discovered
    /// vertices, so the relation stays acyclic.
    pub predecessor: Option<VertexId>,
    /// Discovery timestamp, stamped by depth-first traversal on WHITE->GRAY.
    pub discovery: u32,
    /// Finish timestamp, stamped by depth-first traversal on GRAY->BLACK.
    pub finish: u32,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Vertex {
            label: label.into(),
            color: Color::White,
            distance: Distance::Infinity,
            predecessor: None,
            discovery: 0,
            finish: 0,
        }
    }
}
