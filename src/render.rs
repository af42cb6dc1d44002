//! Rendering and detail boundaries — layout-independent view projections.
//!
//! Everything here is a pure projection of the graph and the playback state;
//! the drawing surface consumes these records without re-deriving anything.

use std::collections::BTreeMap;

use crate::layout::{self, Point};
use crate::matrix::Graph;
use crate::normalize::{MstEdge, display_label};
use crate::playback::Playback;

// =============================================================================
// NODE / CELL VIEWS
// =============================================================================

/// Visual classification of a node at the current playback position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    Current,
    Visited,
    Unvisited,
}

/// Per-node render state handed to the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub label: String,
    pub position: Point,
    pub class: NodeClass,
}

/// Per-cell render state for the adjacency table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub weight: f64,
    pub connected: bool,
}

/// Node views for the whole graph. Without a loaded replay every node is
/// unvisited.
#[must_use]
pub fn node_views(graph: &Graph, playback: Option<&Playback>) -> Vec<NodeView> {
    let positions = layout::circular_positions(graph.size());
    let current = playback.and_then(Playback::current_node);
    let visited = playback.map(Playback::visited).unwrap_or_default();

    graph
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let class = if current == Some(i) {
                NodeClass::Current
            } else if visited.contains(&i) {
                NodeClass::Visited
            } else {
                NodeClass::Unvisited
            };
            NodeView { label: label.clone(), position: positions[i], class }
        })
        .collect()
}

/// Cell views for the adjacency table; a cell is connected when its weight
/// is positive.
#[must_use]
pub fn cell_views(graph: &Graph) -> Vec<Vec<CellView>> {
    graph
        .weights()
        .iter()
        .map(|row| row.iter().map(|&weight| CellView { weight, connected: weight > 0.0 }).collect())
        .collect()
}

// =============================================================================
// DETAIL TABLES
// =============================================================================

/// One row of the Dijkstra distance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceRow {
    pub node: String,
    /// Rendered distance; `"∞"` for unreachable nodes.
    pub distance: String,
    /// Arrow-joined path labels; `"-"` when no path exists.
    pub path: String,
}

/// Table-ready Dijkstra rows in node-index order.
#[must_use]
pub fn distance_rows(
    distances: &BTreeMap<usize, f64>,
    paths: &BTreeMap<usize, Vec<usize>>,
    labels: &[String],
) -> Vec<DistanceRow> {
    distances
        .iter()
        .map(|(&node, &distance)| {
            let path = paths
                .get(&node)
                .filter(|p| !p.is_empty())
                .map_or_else(|| "-".to_owned(), |p| join_path(p, labels));
            DistanceRow {
                node: display_label(labels, node),
                distance: if distance.is_infinite() { "∞".to_owned() } else { format!("{distance}") },
                path,
            }
        })
        .collect()
}

fn join_path(path: &[usize], labels: &[String]) -> String {
    path.iter().map(|&n| display_label(labels, n)).collect::<Vec<_>>().join(" → ")
}

/// One row of the MST edge table.
#[derive(Debug, Clone, PartialEq)]
pub struct MstRow {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Label-resolved MST edge rows in application order.
#[must_use]
pub fn mst_rows(edges: &[MstEdge], labels: &[String]) -> Vec<MstRow> {
    edges
        .iter()
        .map(|e| MstRow {
            from: display_label(labels, e.from),
            to: display_label(labels, e.to),
            weight: e.weight,
        })
        .collect()
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
