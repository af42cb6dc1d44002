//! Result Normalizer — five response shapes into one step timeline.
//!
//! DESIGN
//! ======
//! The compute service returns a different JSON shape per algorithm family:
//! a bare visitation order for BFS/DFS, a visitation order plus distance and
//! path tables for Dijkstra, and an ordered edge list for Prim/Kruskal.
//! Dispatch is a tagged match on [`AlgorithmKind`] with one normalization
//! function per family, each producing the same `{timeline, detail}` record.
//! Render code never branches on "which optional field exists".

use std::collections::BTreeMap;

use serde_json::Value;

use crate::algorithm::AlgorithmKind;

// =============================================================================
// ERROR
// =============================================================================

/// The raw payload lacks the fields required for the requested algorithm.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid {kind} result: {reason}")]
pub struct InvalidResultShape {
    pub kind: AlgorithmKind,
    pub reason: String,
}

fn shape_err(kind: AlgorithmKind, reason: impl Into<String>) -> InvalidResultShape {
    InvalidResultShape { kind, reason: reason.into() }
}

// =============================================================================
// TYPES
// =============================================================================

/// One replayable event in an algorithm execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Dense 0-based position in the timeline.
    pub index: usize,
    /// Human-readable description of the event.
    pub label: String,
    /// The node this step visits, when the step has a single-node meaning.
    /// MST edge steps carry `None`.
    pub visit_order_node: Option<usize>,
}

/// An edge applied by Prim or Kruskal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Algorithm-specific payload attached alongside the timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultDetail {
    /// BFS/DFS: the timeline alone is the full result.
    None,
    /// Distances and shortest paths keyed by raw node index.
    /// `f64::INFINITY` marks an unreachable node.
    Dijkstra {
        distances: BTreeMap<usize, f64>,
        paths: BTreeMap<usize, Vec<usize>>,
    },
    /// Ordered spanning-tree edges plus their total weight.
    Mst { edges: Vec<MstEdge>, total_weight: f64 },
}

/// A normalized execution result: uniform timeline plus detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub timeline: Vec<Step>,
    pub detail: ResultDetail,
}

/// Display label for a node index. Out-of-range indices fall back to the raw
/// index as its own string; label resolution is tolerant and never fails at
/// display time.
#[must_use]
pub fn display_label(labels: &[String], node: usize) -> String {
    labels.get(node).cloned().unwrap_or_else(|| node.to_string())
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Reconcile a raw compute-service response into a uniform timeline.
///
/// # Errors
///
/// Returns [`InvalidResultShape`] when the payload lacks the fields the
/// requested algorithm requires.
pub fn normalize(kind: AlgorithmKind, raw: &Value, labels: &[String]) -> Result<Normalized, InvalidResultShape> {
    match kind {
        AlgorithmKind::Dijkstra => normalize_dijkstra(raw, labels),
        AlgorithmKind::Prim | AlgorithmKind::Kruskal => normalize_mst(kind, raw, labels),
        AlgorithmKind::Bfs | AlgorithmKind::Dfs => normalize_traversal(kind, raw, labels),
    }
}

/// BFS/DFS: `result` or `steps`, whichever is an array of node indices.
fn normalize_traversal(kind: AlgorithmKind, raw: &Value, labels: &[String]) -> Result<Normalized, InvalidResultShape> {
    let order = raw
        .get("result")
        .and_then(Value::as_array)
        .or_else(|| raw.get("steps").and_then(Value::as_array))
        .ok_or_else(|| shape_err(kind, "missing result/steps array"))?;
    let nodes = node_indices(kind, order)?;
    Ok(Normalized { timeline: visit_timeline(&nodes, labels), detail: ResultDetail::None })
}

/// Dijkstra: visitation order plus distance and path tables.
fn normalize_dijkstra(raw: &Value, labels: &[String]) -> Result<Normalized, InvalidResultShape> {
    let kind = AlgorithmKind::Dijkstra;
    let raw_distances = raw
        .get("distances")
        .and_then(Value::as_object)
        .ok_or_else(|| shape_err(kind, "missing distances map"))?;
    let raw_steps = raw
        .get("steps")
        .and_then(Value::as_array)
        .ok_or_else(|| shape_err(kind, "missing steps array"))?;
    let raw_paths = raw
        .get("paths")
        .and_then(Value::as_object)
        .ok_or_else(|| shape_err(kind, "missing paths map"))?;

    let nodes = node_indices(kind, raw_steps)?;

    let mut distances = BTreeMap::new();
    for (key, value) in raw_distances {
        let node = parse_key(kind, key, "distance")?;
        // Strict JSON cannot carry an Infinity literal; unreachable nodes
        // arrive as null (or a missing entry) and normalize to infinity.
        distances.insert(node, value.as_f64().unwrap_or(f64::INFINITY));
    }

    let mut paths = BTreeMap::new();
    for (key, value) in raw_paths {
        let node = parse_key(kind, key, "path")?;
        let hops = value
            .as_array()
            .ok_or_else(|| shape_err(kind, format!("path for node {node} is not an array")))?;
        paths.insert(node, node_indices(kind, hops)?);
    }

    Ok(Normalized {
        timeline: visit_timeline(&nodes, labels),
        detail: ResultDetail::Dijkstra { distances, paths },
    })
}

/// Prim/Kruskal: ordered edge list; `totalWeight` derived when absent.
fn normalize_mst(kind: AlgorithmKind, raw: &Value, labels: &[String]) -> Result<Normalized, InvalidResultShape> {
    let entries = raw
        .get("mst")
        .and_then(Value::as_array)
        .ok_or_else(|| shape_err(kind, "missing mst edge list"))?;

    let mut edges = Vec::with_capacity(entries.len());
    for entry in entries {
        let from = entry
            .get("from")
            .and_then(as_index)
            .ok_or_else(|| shape_err(kind, "mst edge missing 'from'"))?;
        let to = entry
            .get("to")
            .and_then(as_index)
            .ok_or_else(|| shape_err(kind, "mst edge missing 'to'"))?;
        let weight = entry
            .get("weight")
            .and_then(Value::as_f64)
            .ok_or_else(|| shape_err(kind, "mst edge missing 'weight'"))?;
        edges.push(MstEdge { from, to, weight });
    }

    let total_weight = raw
        .get("totalWeight")
        .and_then(Value::as_f64)
        .unwrap_or_else(|| edges.iter().map(|e| e.weight).sum());

    let timeline = edges
        .iter()
        .enumerate()
        .map(|(index, edge)| Step {
            index,
            label: format!(
                "Add edge {} → {} (weight {})",
                display_label(labels, edge.from),
                display_label(labels, edge.to),
                edge.weight
            ),
            // No single "current node" concept for MST steps.
            visit_order_node: None,
        })
        .collect();

    Ok(Normalized { timeline, detail: ResultDetail::Mst { edges, total_weight } })
}

// =============================================================================
// HELPERS
// =============================================================================

fn visit_timeline(nodes: &[usize], labels: &[String]) -> Vec<Step> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, &node)| Step {
            index,
            label: format!("Visit node {}", display_label(labels, node)),
            visit_order_node: Some(node),
        })
        .collect()
}

fn node_indices(kind: AlgorithmKind, values: &[Value]) -> Result<Vec<usize>, InvalidResultShape> {
    values
        .iter()
        .map(|v| as_index(v).ok_or_else(|| shape_err(kind, format!("non-index step entry: {v}"))))
        .collect()
}

fn as_index(v: &Value) -> Option<usize> {
    v.as_u64().and_then(|n| usize::try_from(n).ok())
}

fn parse_key(kind: AlgorithmKind, key: &str, what: &str) -> Result<usize, InvalidResultShape> {
    key.parse::<usize>()
        .map_err(|_| shape_err(kind, format!("non-index {what} key: '{key}'")))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
