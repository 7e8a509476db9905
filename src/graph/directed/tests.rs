//! Tests for the directed graph implementation.

use std::collections::HashSet;

use super::*;

/// 1 -> 2 -> 3 -> 4
fn chain() -> DirectedGraph<u32> {
    DirectedGraph::from_parts(1..=4, [(1, 2), (2, 3), (3, 4)])
}

fn as_set(order: &[u32]) -> HashSet<u32> {
    order.iter().copied().collect()
}

#[test]
fn test_add_edge_requires_both_endpoints() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex('a');
    graph.add_vertex('b');

    graph.add_edge('a', 'b');
    graph.add_edge('a', 'z');
    graph.add_edge('z', 'a');

    assert!(graph.has_edge(&'a', &'b'));
    assert!(!graph.has_edge(&'a', &'z'));
    assert!(!graph.contains_vertex(&'z'));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(&'b').map(HashSet::len), Some(0));
    assert_eq!(graph.neighbors(&'z'), None);
}

#[test]
fn test_add_edge_is_directed_and_deduplicated() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.add_edge(1, 2);
    graph.add_edge(1, 2);

    assert!(graph.has_edge(&1, &2));
    assert!(!graph.has_edge(&2, &1));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_vertex_twice_resets_neighbors() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.add_edge(1, 2);
    graph.add_edge(2, 1);

    graph.add_vertex(1);

    assert!(graph.contains_vertex(&1));
    assert!(graph.neighbors(&1).is_some_and(HashSet::is_empty));
    // Incoming edges are untouched.
    assert!(graph.has_edge(&2, &1));
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_edges_and_is_path() {
    let graph = chain();

    let mut edges: Vec<(u32, u32)> = graph.edges().map(|(a, b)| (*a, *b)).collect();
    edges.sort_unstable();
    assert_eq!(edges, vec![(1, 2), (2, 3), (3, 4)]);

    assert!(graph.is_path(&[1, 2, 3, 4]));
    assert!(graph.is_path(&[3]));
    assert!(!graph.is_path(&[]));
    assert!(!graph.is_path(&[9]));
    assert!(!graph.is_path(&[1, 3]));
}

#[test]
fn test_chain_orders_are_fixed() {
    let graph = chain();

    assert_eq!(graph.bft(&1).unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(graph.dft(&1).unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(graph.dft_recursive(&1).unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(graph.bft(&3).unwrap(), vec![3, 4]);
}

#[test]
fn test_unknown_start_is_an_error() {
    let graph = chain();
    let err = GraphError::UnknownVertex("42".to_string());

    assert_eq!(graph.bft(&42), Err(err.clone()));
    assert_eq!(graph.dft(&42), Err(err.clone()));
    assert_eq!(graph.dft_recursive(&42), Err(err.clone()));
    assert_eq!(graph.bfs(&42, &1), Err(err.clone()));
    assert_eq!(graph.dfs(&42, &42), Err(err));
}

#[test]
fn test_error_message_names_vertex() {
    let graph: DirectedGraph<&str> = DirectedGraph::new();
    let err = graph.bft(&"nowhere").unwrap_err();
    assert_eq!(err.to_string(), "unknown vertex: \"nowhere\"");
}

#[test]
fn test_traversal_report_counts_every_push() {
    // 1 -> 2, 1 -> 3, 2 -> 3, 3 -> 1
    let graph: DirectedGraph<u32> =
        DirectedGraph::from_parts(1..=3, [(1, 2), (1, 3), (2, 3), (3, 1)]);

    for report in [graph.bft_report(&1).unwrap(), graph.dft_report(&1).unwrap()] {
        assert_eq!(as_set(&report.order), HashSet::from([1, 2, 3]));
        assert_eq!(report.order[0], 1);
        // One push per out-edge of each visited vertex.
        assert_eq!(report.pattern.len(), graph.edge_count());
        // The seed plus every push is taken off the frontier exactly once.
        assert_eq!(report.checks, report.pattern.len() + 1);
    }
}

#[test]
fn test_self_loop_visits_once() {
    let graph = DirectedGraph::from_parts([7], [(7, 7)]);

    assert_eq!(graph.bft(&7).unwrap(), vec![7]);
    assert_eq!(graph.dft(&7).unwrap(), vec![7]);
    assert_eq!(graph.dft_recursive(&7).unwrap(), vec![7]);
    assert_eq!(graph.bfs(&7, &7).unwrap(), Some(vec![7]));
}

#[test]
fn test_visit_state_is_shared_across_calls() {
    // Two components: 1 -> 2 and 3 -> 2
    let graph = DirectedGraph::from_parts(1..=3, [(1, 2), (3, 2)]);
    let mut state = VisitState::new();

    graph.dft_recursive_with(&1, &mut state).unwrap();
    assert_eq!(state.order(), &[1, 2]);

    graph.dft_recursive_with(&3, &mut state).unwrap();
    assert_eq!(state.order(), &[1, 2, 3]);

    // Already visited: no effect.
    graph.dft_recursive_with(&2, &mut state).unwrap();
    assert!(state.is_visited(&2));
    assert_eq!(state.into_order(), vec![1, 2, 3]);
}

#[test]
fn test_visit_state_skips_lookup_for_visited_vertex() {
    let graph = chain();
    let mut state = VisitState::new();
    graph.dft_recursive_with(&1, &mut state).unwrap();

    let other: DirectedGraph<u32> = DirectedGraph::new();
    assert_eq!(other.dft_recursive_with(&1, &mut state), Ok(()));
    assert!(other.dft_recursive_with(&9, &mut state).is_err());
}

#[test]
fn test_search_start_equals_target() {
    let graph = chain();
    assert_eq!(graph.bfs(&2, &2).unwrap(), Some(vec![2]));
    assert_eq!(graph.dfs(&2, &2).unwrap(), Some(vec![2]));
}

#[test]
fn test_search_reports_no_path() {
    let graph = chain();

    // Edges only go forward.
    assert_eq!(graph.bfs(&4, &1).unwrap(), None);
    assert_eq!(graph.dfs(&4, &1).unwrap(), None);
    // An unknown target is simply unreachable.
    assert_eq!(graph.bfs(&1, &99).unwrap(), None);
    assert_eq!(graph.dfs(&1, &99).unwrap(), None);
}

#[test]
fn test_bfs_prefers_shortcut() {
    // 1 -> 2 -> 3 -> 4 plus the shortcut 1 -> 4
    let mut graph = chain();
    graph.add_edge(1, 4);

    assert_eq!(graph.bfs(&1, &4).unwrap(), Some(vec![1, 4]));

    let path = graph.dfs(&1, &4).unwrap().unwrap();
    assert!(graph.is_path(&path));
    assert_eq!(path.first(), Some(&1));
    assert_eq!(path.last(), Some(&4));
}

#[test]
fn test_serde_roundtrip_preserves_structure() {
    let graph: DirectedGraph<u32> = DirectedGraph::from_parts(1..=3, [(1, 2), (2, 3), (3, 1)]);
    let json = serde_json::to_string(&graph).unwrap();
    let back: DirectedGraph<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, graph);
}

#[test]
fn test_deserialize_applies_lenient_edges() {
    let json = r#"{ "vertices": ["a", "b", "a"], "edges": [["a", "b"], ["b", "ghost"]] }"#;
    let graph: DirectedGraph<String> = serde_json::from_str(json).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(&"a".to_string(), &"b".to_string()));
}

#[test]
fn test_deserialize_without_edges() {
    let graph: DirectedGraph<i64> = serde_json::from_str(r#"{ "vertices": [1, 2] }"#).unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 0);
}

/// A vertex type with no `Default` impl.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
struct Label(String);

#[test]
fn test_deserialize_vertex_without_default() {
    let json = r#"{ "vertices": ["x", "y"], "edges": [["x", "y"]] }"#;
    let graph: DirectedGraph<Label> = serde_json::from_str(json).unwrap();
    let (x, y) = (Label("x".to_string()), Label("y".to_string()));

    assert!(graph.has_edge(&x, &y));
    assert_eq!(graph.bfs(&x, &y).unwrap(), Some(vec![x.clone(), y.clone()]));

    let bare: DirectedGraph<Label> = serde_json::from_str(r#"{ "vertices": ["x"] }"#).unwrap();
    assert_eq!(bare.edge_count(), 0);
    assert!(bare.contains_vertex(&x));
}

#[test]
fn test_capacity_and_vertex_listing() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::with_capacity(8);
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.vertices().count(), 0);

    graph.add_vertex(5);
    assert!(!graph.is_empty());

    let mut vertices: Vec<u32> = chain().vertices().copied().collect();
    vertices.sort_unstable();
    assert_eq!(vertices, vec![1, 2, 3, 4]);
    assert_eq!(DirectedGraph::<u32>::default(), DirectedGraph::new());
}

#[test]
fn test_iterative_dft_handles_deep_chain() {
    let size = 200_000u32;
    let graph = DirectedGraph::from_parts(0..size, (1..size).map(|v| (v - 1, v)));

    let order = graph.dft(&0).unwrap();
    assert_eq!(order.len(), size as usize);
    assert_eq!(order.last(), Some(&(size - 1)));
    assert_eq!(graph.bft(&0).unwrap().len(), size as usize);
}
