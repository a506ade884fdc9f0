//! DOT-subset graph notation: the textual read/write contract with the core.
//!
//! The dialect covers exactly what the renderer emits: a `Graph`/`Digraph`
//! header, one statement per vertex, `--`/`->` edge statements with an
//! optional numeric `label` attribute carrying the weight. Anything emitted
//! by [`to_dot`] parses back through [`from_dot`].

use std::fmt::Write as _;

use regex::Regex;

use crate::error::{Result, WalkError};
use crate::graph::{EdgeSpec, Graph};
use crate::snapshot::{GraphSnapshot, Walk};
use crate::vertex::{Color, Distance};

fn regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| WalkError::InvalidDot {
        reason: e.to_string(),
    })
}

/// Parse a DOT-subset graph description.
///
/// An edge's numeric `label` attribute is read as its weight; for an
/// undirected graph the endpoint pair is normalized to ascending order.
/// Vertex attribute blocks (colors, fonts) are ignored on the way in.
pub fn from_dot(input: &str) -> Result<Graph> {
    let header_re = regex(r"^\s*([Dd]igraph|[Gg]raph)\s*\{")?;
    let vertex_re = regex(r"^\s*(\w+)\s*(\[[^\]]*\])?\s*;")?;
    let edge_re = regex(r"^\s*(\w+)\s*-[->]\s*(\w+)\s*(\[[^\]]*\])?\s*;")?;
    let weight_re = regex(r#"label="(-?\d+)""#)?;

    let mut directed = false;
    let mut seen_header = false;
    let mut labels: Vec<String> = Vec::new();
    let mut edges: Vec<EdgeSpec> = Vec::new();

    for line in input.lines() {
        if let Some(caps) = header_re.captures(line) {
            seen_header = true;
            directed = caps[1].eq_ignore_ascii_case("digraph");
            continue;
        }
        if let Some(caps) = edge_re.captures(line) {
            let (mut from, mut to) = (caps[1].to_string(), caps[2].to_string());
            if !directed && from > to {
                std::mem::swap(&mut from, &mut to);
            }
            let weight = caps
                .get(3)
                .and_then(|attrs| weight_re.captures(attrs.as_str()))
                .and_then(|w| w[1].parse::<i64>().ok());
            edges.push(match weight {
                Some(w) => EdgeSpec::weighted(from, to, w),
                None => EdgeSpec::new(from, to),
            });
        } else if let Some(caps) = vertex_re.captures(line) {
            labels.push(caps[1].to_string());
        }
    }

    if !seen_header {
        return Err(WalkError::InvalidDot {
            reason: "missing Graph/Digraph header".to_string(),
        });
    }
    Graph::build(labels, edges, directed)
}

/// Render the annotation after a vertex label: best-known distance for the
/// path searches, `discovery:finish` (with `-` for unstamped) for the
/// depth-first walks.
fn vertex_annotation(vertex: &crate::snapshot::VertexSnapshot, walk: Walk) -> (String, &'static str) {
    match walk {
        Walk::Dfs => {
            let stamp = |t: u32| {
                if t == 0 {
                    "-".to_string()
                } else {
                    t.to_string()
                }
            };
            (
                format!("{}:{}:{}", vertex.label, stamp(vertex.discovery), stamp(vertex.finish)),
                "DejaVu Serif",
            )
        }
        Walk::Bfs | Walk::Dijkstra | Walk::DagSp => match vertex.distance {
            Distance::Infinity => (format!("{}:&infin;", vertex.label), "Symbol"),
            Distance::NegInfinity => (format!("{}:-&infin;", vertex.label), "Symbol"),
            Distance::Finite(d) => (format!("{}:{}", vertex.label, d), "DejaVu Serif"),
        },
    }
}

/// Emit one snapshot as a DOT diagram.
///
/// GRAY and BLACK vertices are filled, predecessor-tree edges are drawn with
/// penwidth 3, and an optional legend line captions the diagram. `blank`
/// produces an uncolored, unannotated template of the same graph.
pub fn to_dot(snapshot: &GraphSnapshot, walk: Walk, legend: Option<&str>, blank: bool) -> String {
    let mut out = String::new();
    out.push_str(if snapshot.directed {
        "Digraph {\n"
    } else {
        "Graph {\n"
    });

    for vertex in &snapshot.vertices {
        if blank {
            let _ = writeln!(out, "{};", vertex.label);
            continue;
        }
        let (annotation, font) = vertex_annotation(vertex, walk);
        let _ = write!(out, "{} [ label=\"{}\" fontname=\"{}\"", vertex.label, annotation, font);
        match vertex.color {
            Color::Black => {
                out.push_str(" fontcolor=white style=filled fontname=\"time-bold\" fillcolor=black");
            }
            Color::Gray => {
                out.push_str(" style=filled fontname=\"time-bold\" fillcolor=gray52");
            }
            Color::White => {}
        }
        out.push_str(" ];\n");
    }

    let arrow = if snapshot.directed { "->" } else { "--" };
    for edge in &snapshot.edges {
        let label = edge
            .weight
            .map(|w| w.to_string())
            .unwrap_or_default();
        let penwidth = if edge.on_tree && !blank { 3 } else { 1 };
        let _ = writeln!(
            out,
            "{}{}{}[label=\"{}\", penwidth={}];",
            edge.from, arrow, edge.to, label, penwidth
        );
    }

    if let Some(legend) = legend {
        let _ = writeln!(out, "label=\"{}\" fontname=\"DejaVu Serif\"", legend);
    }
    out.push_str("}\n");
    out
}
