//! Tests for algorithm kind parsing and endpoint mapping.

use super::*;

#[test]
fn endpoints_match_service_routes() {
    assert_eq!(AlgorithmKind::Bfs.endpoint(), "run_bfs");
    assert_eq!(AlgorithmKind::Dfs.endpoint(), "run_dfs");
    assert_eq!(AlgorithmKind::Dijkstra.endpoint(), "run_dijkstra");
    assert_eq!(AlgorithmKind::Prim.endpoint(), "run_prim");
    assert_eq!(AlgorithmKind::Kruskal.endpoint(), "run_kruskal");
}

#[test]
fn traversal_algorithms_use_start() {
    assert!(AlgorithmKind::Bfs.uses_start());
    assert!(AlgorithmKind::Dfs.uses_start());
    assert!(AlgorithmKind::Dijkstra.uses_start());
    assert!(!AlgorithmKind::Prim.uses_start());
    assert!(!AlgorithmKind::Kruskal.uses_start());
}

#[test]
fn mst_split_matches_start_split() {
    for kind in AlgorithmKind::ALL {
        assert_eq!(kind.is_mst(), !kind.uses_start());
    }
}

#[test]
fn parse_round_trips_display() {
    for kind in AlgorithmKind::ALL {
        let parsed: AlgorithmKind = kind.to_string().parse().unwrap();
        assert_eq!(parsed, kind);
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("BFS".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Bfs);
    assert_eq!("Dijkstra".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Dijkstra);
}

#[test]
fn parse_rejects_unknown_names() {
    let err = "bellman-ford".parse::<AlgorithmKind>().unwrap_err();
    assert_eq!(err, UnknownAlgorithm("bellman-ford".into()));
    assert!(err.to_string().contains("bellman-ford"));
}
