use super::*;
use crate::graph::EdgeSpec;
use crate::snapshot::{Recorder, Walk};

/// Cormen Figure 24.6: directed weighted graph for Dijkstra.
fn dijkstra_graph() -> Graph {
    Graph::build(
        ["s", "t", "x", "y", "z"],
        [
            ("s", "t", 10),
            ("s", "y", 5),
            ("t", "x", 1),
            ("t", "y", 2),
            ("x", "z", 4),
            ("y", "t", 3),
            ("y", "x", 9),
            ("y", "z", 2),
            ("z", "s", 7),
            ("z", "x", 6),
        ],
        true,
    )
    .unwrap()
}

/// Gross & Yellen, p. 180: undirected weighted graph.
fn gross_yellen_graph() -> Graph {
    Graph::build(
        ["s", "a", "b", "c", "d", "e", "f", "g"],
        [
            ("s", "a", 5),
            ("s", "b", 7),
            ("s", "e", 4),
            ("s", "g", 5),
            ("a", "g", 4),
            ("b", "c", 9),
            ("b", "f", 8),
            ("c", "d", 7),
            ("c", "e", 9),
            ("c", "f", 11),
            ("d", "e", 8),
            ("e", "f", 8),
        ],
        false,
    )
    .unwrap()
}

/// Gross & Yellen, p. 180, modified into a digraph.
fn gross_yellen_digraph() -> Graph {
    Graph::build(
        ["s", "a", "b", "c", "d", "e", "f", "g"],
        [
            ("s", "a", 5),
            ("s", "b", 7),
            ("s", "e", 3),
            ("a", "g", 4),
            ("b", "c", 9),
            ("b", "f", 8),
            ("c", "d", 7),
            ("c", "f", 2),
            ("d", "e", 8),
            ("d", "c", 1),
            ("e", "a", 1),
            ("e", "c", 4),
            ("e", "d", 4),
            ("e", "f", 12),
            ("f", "c", 11),
            ("g", "s", 5),
        ],
        true,
    )
    .unwrap()
}

/// Cormen Figure 24.5: weighted DAG with negative edges.
fn weighted_dag() -> Graph {
    Graph::build(
        ["r", "s", "t", "x", "y", "z"],
        [
            ("r", "s", 5),
            ("r", "t", 3),
            ("s", "t", 2),
            ("s", "x", 6),
            ("t", "x", 7),
            ("t", "y", 4),
            ("t", "z", 2),
            ("x", "y", -1),
            ("x", "z", 1),
            ("y", "z", -2),
        ],
        true,
    )
    .unwrap()
}

fn weighted_dag_2() -> Graph {
    Graph::build(
        ["a", "b", "c", "d", "e", "f", "g"],
        [
            ("a", "b", 8),
            ("a", "d", 1),
            ("b", "c", 4),
            ("b", "d", 3),
            ("c", "d", 5),
            ("c", "e", -1),
            ("c", "f", 2),
            ("d", "e", 6),
            ("d", "f", -2),
            ("e", "f", 1),
            ("e", "g", 3),
            ("f", "g", 1),
        ],
        true,
    )
    .unwrap()
}

/// Activity-on-edge project network, 21 vertices.
fn pert_chart() -> Graph {
    Graph::build(
        [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p",
            "q", "r", "s", "t", "u",
        ],
        [
            ("s", "a", 0),
            ("s", "h", 0),
            ("s", "o", 0),
            ("a", "b", 0),
            ("b", "c", 1),
            ("b", "f", 1),
            ("c", "d", 0),
            ("d", "e", 1),
            ("d", "g", 2),
            ("d", "k", 1),
            ("f", "d", 0),
            ("g", "l", 3),
            ("k", "l", 3),
            ("h", "i", 0),
            ("i", "j", 2),
            ("j", "d", 0),
            ("j", "m", 1),
            ("l", "n", 2),
            ("n", "r", 1),
            ("r", "t", 1),
            ("t", "u", 1),
            ("o", "p", 1),
            ("p", "q", 2),
            ("q", "u", 1),
        ],
        true,
    )
    .unwrap()
}

fn space_probe_chart() -> Graph {
    Graph::build(
        ["s", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "t"],
        [
            ("s", "a", 12),
            ("s", "e", 3),
            ("s", "f", 3),
            ("a", "b", 2),
            ("b", "c", 2),
            ("b", "h", 1),
            ("c", "l", 0),
            ("h", "l", 0),
            ("l", "i", 1),
            ("e", "f", 2),
            ("f", "d", 1),
            ("f", "g", 1),
            ("f", "i", 3),
            ("i", "j", 1),
            ("i", "k", 4),
            ("k", "t", 1),
        ],
        true,
    )
    .unwrap()
}

fn distance_of(g: &Graph, label: &str) -> Distance {
    g.vertex(g.resolve(label).unwrap()).distance
}

fn predecessor_of(g: &Graph, label: &str) -> Option<String> {
    let id = g.resolve(label).unwrap();
    g.vertex(id)
        .predecessor
        .map(|p| g.label(p).to_string())
}

fn assert_distances(g: &Graph, expected: &[(&str, i64)]) {
    for &(label, d) in expected {
        assert_eq!(distance_of(g, label), Distance::Finite(d), "vertex {}", label);
    }
}

fn assert_predecessors(g: &Graph, expected: &[(&str, &str)]) {
    for &(label, pred) in expected {
        assert_eq!(
            predecessor_of(g, label).as_deref(),
            Some(pred),
            "vertex {}",
            label
        );
    }
}

#[test]
fn test_dag_shortest_path_distances() {
    let mut g = weighted_dag();
    dag_shortest_path(&mut g, "s").unwrap();
    assert_distances(&g, &[("s", 0), ("t", 2), ("x", 6), ("y", 5), ("z", 3)]);
    assert_eq!(distance_of(&g, "r"), Distance::Infinity);
}

#[test]
fn test_dag_shortest_path_predecessors() {
    let mut g = weighted_dag();
    dag_shortest_path(&mut g, "s").unwrap();
    assert_predecessors(&g, &[("t", "s"), ("x", "s"), ("y", "x"), ("z", "y")]);
    assert_eq!(predecessor_of(&g, "s"), None);
    assert_eq!(predecessor_of(&g, "r"), None);
}

#[test]
fn test_dag_shortest_path_from_interior_source() {
    let mut g = weighted_dag_2();
    dag_shortest_path(&mut g, "b").unwrap();
    assert_distances(
        &g,
        &[("b", 0), ("c", 4), ("d", 3), ("e", 3), ("f", 1), ("g", 2)],
    );
    assert_eq!(distance_of(&g, "a"), Distance::Infinity);
    assert_predecessors(
        &g,
        &[("c", "b"), ("d", "b"), ("e", "c"), ("f", "d"), ("g", "f")],
    );
}

#[test]
fn test_dag_longest_path_uses_neg_infinity_sentinel() {
    let mut g = weighted_dag_2();
    dag_longest_path(&mut g, "b").unwrap();
    assert_eq!(distance_of(&g, "a"), Distance::NegInfinity);
    // longest finish: b -> c -> d -> e -> g
    assert_distances(
        &g,
        &[("b", 0), ("c", 4), ("d", 9), ("e", 15), ("f", 16), ("g", 18)],
    );
    assert_predecessors(&g, &[("g", "e"), ("f", "e"), ("e", "d"), ("d", "c")]);
}

#[test]
fn test_dag_longest_path_saturates_on_huge_weights() {
    let mut g = Graph::build(
        ["a", "b", "c"],
        [("a", "b", i64::MAX), ("b", "c", i64::MAX)],
        true,
    )
    .unwrap();
    dag_longest_path(&mut g, "a").unwrap();
    assert_eq!(distance_of(&g, "b"), Distance::Finite(i64::MAX));
    assert_eq!(distance_of(&g, "c"), Distance::Finite(i64::MAX));
    assert_predecessors(&g, &[("b", "a"), ("c", "b")]);
}

#[test]
fn test_dag_path_rejects_cycle() {
    let mut g = Graph::build(
        ["a", "b", "c"],
        [("a", "b", 1), ("b", "c", 1), ("c", "a", 1)],
        true,
    )
    .unwrap();
    let err = dag_shortest_path(&mut g, "a").unwrap_err();
    assert!(matches!(err, WalkError::CyclicGraph { .. }));
}

#[test]
fn test_dag_path_unknown_source_fails() {
    let mut g = weighted_dag();
    let err = dag_shortest_path(&mut g, "q").unwrap_err();
    assert!(matches!(err, WalkError::UnknownLabel { label } if label == "q"));
}

#[test]
fn test_dijkstra_distances() {
    let mut g = dijkstra_graph();
    dijkstra(&mut g, "s").unwrap();
    assert_distances(&g, &[("s", 0), ("t", 8), ("x", 9), ("y", 5), ("z", 7)]);
}

#[test]
fn test_dijkstra_predecessors() {
    let mut g = dijkstra_graph();
    dijkstra(&mut g, "s").unwrap();
    assert_eq!(predecessor_of(&g, "s"), None);
    assert_predecessors(&g, &[("t", "y"), ("x", "t"), ("y", "s"), ("z", "y")]);
}

#[test]
fn test_dijkstra_undirected() {
    let mut g = gross_yellen_graph();
    dijkstra(&mut g, "s").unwrap();
    assert_distances(
        &g,
        &[
            ("s", 0),
            ("a", 5),
            ("b", 7),
            ("c", 13),
            ("d", 12),
            ("e", 4),
            ("f", 12),
            ("g", 5),
        ],
    );
    assert_predecessors(
        &g,
        &[
            ("a", "s"),
            ("b", "s"),
            ("c", "e"),
            ("d", "e"),
            ("e", "s"),
            ("f", "e"),
            ("g", "s"),
        ],
    );
}

#[test]
fn test_dijkstra_digraph() {
    let mut g = gross_yellen_digraph();
    dijkstra(&mut g, "s").unwrap();
    assert_distances(
        &g,
        &[
            ("s", 0),
            ("a", 4),
            ("b", 7),
            ("c", 7),
            ("d", 7),
            ("e", 3),
            ("f", 9),
            ("g", 8),
        ],
    );
    assert_predecessors(
        &g,
        &[
            ("a", "e"),
            ("b", "s"),
            ("c", "e"),
            ("d", "e"),
            ("e", "s"),
            ("f", "c"),
            ("g", "a"),
        ],
    );
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let mut g = weighted_dag();
    let err = dijkstra(&mut g, "s").unwrap_err();
    assert!(matches!(
        err,
        WalkError::NegativeWeight { weight, .. } if weight < 0
    ));
}

#[test]
fn test_dijkstra_idempotent_after_reset() {
    let mut g = dijkstra_graph();
    dijkstra(&mut g, "s").unwrap();
    let first: Vec<Distance> = g.ids().map(|id| g.vertex(id).distance).collect();
    dijkstra(&mut g, "s").unwrap();
    let second: Vec<Distance> = g.ids().map(|id| g.vertex(id).distance).collect();
    assert_eq!(first, second);
}

#[test]
fn test_dijkstra_settles_every_vertex() {
    let mut g = dijkstra_graph();
    let mut recorder = Recorder::new(Walk::Dijkstra);
    dijkstra_observed(&mut g, "s", &mut recorder).unwrap();
    // one snapshot per settled vertex
    assert_eq!(recorder.steps().len(), g.len());
    assert!(g.ids().all(|id| g.vertex(id).color == Color::Black));
}

#[test]
fn test_dijkstra_steps_caption_remaining_queue() {
    let mut g = dijkstra_graph();
    let mut recorder = Recorder::new(Walk::Dijkstra);
    dijkstra_observed(&mut g, "s", &mut recorder).unwrap();
    let legends: Vec<&str> = recorder
        .steps()
        .iter()
        .map(|s| s.legend.as_deref().unwrap())
        .collect();
    // after settling s, y (5) is closest, then t (10); x and z are unreached
    assert_eq!(legends.first(), Some(&"Q=[y, t, x, z]"));
    assert_eq!(legends.last(), Some(&"Q=[]"));
}

#[test]
fn test_critical_path_project_network() {
    let mut g = pert_chart();
    let result = critical_path(&mut g, "s").unwrap();
    assert_eq!(
        result.path,
        ["s", "h", "i", "j", "d", "g", "l", "n", "r", "t", "u"]
    );
    assert_eq!(result.duration, 12);
}

#[test]
fn test_critical_path_space_probe() {
    let mut g = space_probe_chart();
    let result = critical_path(&mut g, "s").unwrap();
    assert_eq!(result.path, ["s", "a", "b", "c", "l", "i", "k", "t"]);
    assert_eq!(result.duration, 22);
}

#[test]
fn test_critical_path_rejects_cycle() {
    let mut g = Graph::build(
        ["a", "b", "c"],
        [("a", "b", 1), ("b", "c", 1), ("c", "a", 1)],
        true,
    )
    .unwrap();
    let err = critical_path(&mut g, "a").unwrap_err();
    assert!(matches!(err, WalkError::CyclicGraph { .. }));
}

#[test]
fn test_critical_path_single_vertex() {
    let edges: [EdgeSpec; 0] = [];
    let mut g = Graph::build(["s"], edges, true).unwrap();
    let result = critical_path(&mut g, "s").unwrap();
    assert_eq!(result.path, ["s"]);
    assert_eq!(result.duration, 0);
}
