//! Tests for the render and detail boundary projections.

use std::collections::BTreeMap;

use super::*;
use crate::matrix;
use crate::normalize::{MstEdge, Normalized, ResultDetail, Step};
use crate::playback::Playback;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

fn traversal_playback(nodes: &[usize]) -> Playback {
    Playback::new(Normalized {
        timeline: nodes
            .iter()
            .enumerate()
            .map(|(index, &node)| Step {
                index,
                label: format!("Visit node {node}"),
                visit_order_node: Some(node),
            })
            .collect(),
        detail: ResultDetail::None,
    })
}

// =============================================================================
// NODE VIEWS
// =============================================================================

#[test]
fn no_playback_leaves_every_node_unvisited() {
    let graph = matrix::parse("A B\nA 0 1\nB 1 0\n").unwrap();
    let views = node_views(&graph, None);
    assert_eq!(views.len(), 2);
    assert!(views.iter().all(|v| v.class == NodeClass::Unvisited));
    assert_eq!(views[0].label, "A");
}

#[test]
fn classification_follows_the_playhead() {
    let graph = matrix::parse("A B C\nA 0 1 1\nB 1 0 1\nC 1 1 0\n").unwrap();
    let mut playback = traversal_playback(&[0, 2, 1]);
    playback.next(); // playhead on node 2, node 0 behind it

    let views = node_views(&graph, Some(&playback));
    assert_eq!(views[0].class, NodeClass::Visited);
    assert_eq!(views[2].class, NodeClass::Current);
    assert_eq!(views[1].class, NodeClass::Unvisited);
}

#[test]
fn node_views_carry_layout_positions() {
    let graph = matrix::parse("0 1\n1 0\n").unwrap();
    let views = node_views(&graph, None);
    let expected = crate::layout::circular_positions(2);
    assert_eq!(views[0].position, expected[0]);
    assert_eq!(views[1].position, expected[1]);
}

// =============================================================================
// CELL VIEWS
// =============================================================================

#[test]
fn cells_are_connected_when_weight_is_positive() {
    let graph = matrix::parse("0 4\n0 0\n").unwrap();
    let cells = cell_views(&graph);
    assert!(!cells[0][0].connected);
    assert!(cells[0][1].connected);
    assert_eq!(cells[0][1].weight, 4.0);
    assert!(!cells[1][0].connected);
}

// =============================================================================
// DIJKSTRA TABLE
// =============================================================================

#[test]
fn distance_rows_join_paths_with_arrows() {
    let distances = BTreeMap::from([(0, 0.0), (1, 5.0)]);
    let paths = BTreeMap::from([(0, vec![0]), (1, vec![0, 1])]);
    let rows = distance_rows(&distances, &paths, &labels(&["A", "B"]));
    assert_eq!(rows[1].node, "B");
    assert_eq!(rows[1].distance, "5");
    assert_eq!(rows[1].path, "A → B");
}

#[test]
fn unreachable_nodes_render_infinity_and_dash() {
    let distances = BTreeMap::from([(0, 0.0), (1, f64::INFINITY)]);
    let paths = BTreeMap::from([(0, vec![0]), (1, vec![])]);
    let rows = distance_rows(&distances, &paths, &labels(&["A", "B"]));
    assert_eq!(rows[1].distance, "∞");
    assert_eq!(rows[1].path, "-");
}

#[test]
fn missing_path_entry_renders_dash() {
    let distances = BTreeMap::from([(0, 0.0)]);
    let paths = BTreeMap::new();
    let rows = distance_rows(&distances, &paths, &labels(&["A"]));
    assert_eq!(rows[0].path, "-");
}

// =============================================================================
// MST TABLE
// =============================================================================

#[test]
fn mst_rows_resolve_labels_with_fallback() {
    let edges = [MstEdge { from: 0, to: 5, weight: 2.5 }];
    let rows = mst_rows(&edges, &labels(&["A", "B"]));
    assert_eq!(rows[0].from, "A");
    assert_eq!(rows[0].to, "5");
    assert_eq!(rows[0].weight, 2.5);
}
