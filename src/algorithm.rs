//! Algorithm selection — the closed set of algorithms the compute service runs.

use std::fmt;
use std::str::FromStr;

/// The five graph algorithms a session can dispatch.
///
/// Traversal algorithms (BFS, DFS, Dijkstra) take a start node; spanning-tree
/// algorithms (Prim, Kruskal) ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
    Kruskal,
}

impl AlgorithmKind {
    /// All kinds, in menu order.
    pub const ALL: [Self; 5] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::Prim, Self::Kruskal];

    /// Path segment of the compute-service endpoint for this algorithm.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Bfs => "run_bfs",
            Self::Dfs => "run_dfs",
            Self::Dijkstra => "run_dijkstra",
            Self::Prim => "run_prim",
            Self::Kruskal => "run_kruskal",
        }
    }

    /// Whether the algorithm takes a start node.
    #[must_use]
    pub fn uses_start(self) -> bool {
        !matches!(self, Self::Prim | Self::Kruskal)
    }

    /// Whether the result is a spanning tree rather than a visitation order.
    #[must_use]
    pub fn is_mst(self) -> bool {
        matches!(self, Self::Prim | Self::Kruskal)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        };
        f.write_str(name)
    }
}

/// The requested algorithm name is not one of the supported five.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown algorithm '{0}' (expected bfs, dfs, dijkstra, prim or kruskal)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for AlgorithmKind {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "prim" => Ok(Self::Prim),
            "kruskal" => Ok(Self::Kruskal),
            other => Err(UnknownAlgorithm(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[path = "algorithm_test.rs"]
mod tests;
