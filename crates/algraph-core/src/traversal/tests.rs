use super::*;
use crate::error::AlgoError;
use crate::graph::{Digraph, Graph};
use proptest::prelude::*;

fn undirected(vertices: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::new(vertices);
    for &(v, w) in edges {
        g.add_edge(v, w).unwrap();
    }
    g
}

fn directed(vertices: usize, edges: &[(usize, usize)]) -> Digraph {
    let mut g = Digraph::new(vertices);
    for &(v, w) in edges {
        g.add_edge(v, w).unwrap();
    }
    g
}

/// Square 0-1-3-2-0 plus an unreachable vertex 4
fn square() -> Graph {
    undirected(5, &[(0, 1), (0, 2), (1, 3), (2, 3)])
}

#[test]
fn test_bfs_finds_shortest_paths() {
    let bfs = BreadthFirstPaths::new(&square(), 0).unwrap();
    assert_eq!(bfs.source(), 0);
    assert_eq!(bfs.dist_to(0).unwrap(), Some(0));
    assert_eq!(bfs.dist_to(3).unwrap(), Some(2));
    assert_eq!(bfs.path_to(3).unwrap(), Some(vec![0, 1, 3]));
    assert_eq!(bfs.path_to(2).unwrap(), Some(vec![0, 2]));
    assert_eq!(bfs.path_to(0).unwrap(), Some(vec![0]));
}

#[test]
fn test_bfs_unreachable_vertex_has_no_path() {
    let bfs = BreadthFirstPaths::new(&square(), 0).unwrap();
    assert!(!bfs.has_path_to(4).unwrap());
    assert_eq!(bfs.dist_to(4).unwrap(), None);
    assert_eq!(bfs.path_to(4).unwrap(), None);
}

#[test]
fn test_bfs_rejects_bad_vertices() {
    let g = square();
    assert!(matches!(
        BreadthFirstPaths::new(&g, 5),
        Err(AlgoError::VertexOutOfRange { vertex: 5, .. })
    ));
    let bfs = BreadthFirstPaths::new(&g, 0).unwrap();
    assert!(bfs.path_to(9).is_err());
}

#[test]
fn test_dfs_follows_adjacency_order() {
    let dfs = DepthFirstPaths::new(&square(), 0).unwrap();
    // 0 -> 1 -> 3 -> 2, so 2 is reached the long way round
    assert_eq!(dfs.path_to(2).unwrap(), Some(vec![0, 1, 3, 2]));
    assert!(dfs.has_path_to(3).unwrap());
    assert!(!dfs.has_path_to(4).unwrap());
    assert_eq!(dfs.path_to(4).unwrap(), None);
}

#[test]
fn test_dfs_on_digraph_respects_direction() {
    let g = directed(3, &[(0, 1), (2, 0)]);
    let dfs = DepthFirstPaths::new(&g, 0).unwrap();
    assert!(dfs.has_path_to(1).unwrap());
    assert!(!dfs.has_path_to(2).unwrap());
}

#[test]
fn test_depth_first_driver_handles_long_chains() {
    let n = 100_000;
    let edges: Vec<(usize, usize)> = (0..n - 1).map(|v| (v, v + 1)).collect();
    let g = directed(n, &edges);
    let dfs = DepthFirstPaths::new(&g, 0).unwrap();
    assert_eq!(dfs.path_to(n - 1).unwrap().map(|p| p.len()), Some(n));
}

#[test]
fn test_connected_components() {
    let g = undirected(6, &[(0, 1), (1, 2), (3, 4), (4, 4)]);
    let cc = ConnectedComponents::new(&g);
    assert_eq!(cc.count(), 3);
    assert_eq!(cc.id(2).unwrap(), 0);
    assert_eq!(cc.id(4).unwrap(), 1);
    assert_eq!(cc.id(5).unwrap(), 2);
    assert_eq!(cc.size(0).unwrap(), 3);
    assert_eq!(cc.size(5).unwrap(), 1);
    assert!(cc.connected(0, 2).unwrap());
    assert!(!cc.connected(2, 3).unwrap());
    assert!(cc.id(6).is_err());
}

#[test]
fn test_connected_components_of_empty_graph() {
    let cc = ConnectedComponents::new(&Graph::new(0));
    assert_eq!(cc.count(), 0);
}

#[test]
fn test_depth_first_order_of_dag() {
    let g = directed(5, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    let order = DepthFirstOrder::new(&g);
    assert_eq!(order.pre().collect::<Vec<_>>(), vec![0, 1, 3, 2, 4]);
    assert_eq!(order.post().collect::<Vec<_>>(), vec![3, 1, 2, 0, 4]);
    assert_eq!(order.reverse_post().collect::<Vec<_>>(), vec![4, 0, 2, 1, 3]);
    // iterating again yields the same sequence
    assert_eq!(order.reverse_post().count(), 5);
    assert_eq!(order.reverse_post().next(), Some(4));
}

#[test]
fn test_reverse_post_is_topological_for_dag() {
    let edges = [(5, 0), (5, 2), (2, 3), (3, 1), (4, 0), (4, 1), (0, 6)];
    let g = directed(7, &edges);
    let order: Vec<usize> = DepthFirstOrder::new(&g).reverse_post().collect();
    let mut position = vec![0; 7];
    for (i, &v) in order.iter().enumerate() {
        position[v] = i;
    }
    for (v, w) in edges {
        assert!(position[v] < position[w], "{v} must come before {w}");
    }
}

#[test]
fn test_strong_components() {
    let g = directed(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3), (5, 5)]);
    let scc = StrongComponents::new(&g);
    assert_eq!(scc.count(), 3);
    assert!(scc.strongly_connected(0, 2).unwrap());
    assert!(scc.strongly_connected(3, 4).unwrap());
    assert!(!scc.strongly_connected(2, 3).unwrap());
    assert!(!scc.strongly_connected(5, 0).unwrap());
    assert!(scc.id(6).is_err());
}

#[test]
fn test_strong_components_of_dag_are_singletons() {
    let g = directed(4, &[(0, 1), (1, 2), (0, 3)]);
    let scc = StrongComponents::new(&g);
    assert_eq!(scc.count(), 4);
}

/// Edge-count distances by repeated relaxation
fn brute_force_distances(vertices: usize, edges: &[(usize, usize)], source: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; vertices];
    dist[source] = Some(0);
    for _ in 0..vertices {
        for &(v, w) in edges {
            for (a, b) in [(v, w), (w, v)] {
                if let Some(d) = dist[a] {
                    let improves = match dist[b] {
                        None => true,
                        Some(current) => d + 1 < current,
                    };
                    if improves {
                        dist[b] = Some(d + 1);
                    }
                }
            }
        }
    }
    dist
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1_usize..10).prop_flat_map(|n| (Just(n), proptest::collection::vec((0..n, 0..n), 0..20)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Test that BFS distances match brute-force shortest path lengths
    #[test]
    fn prop_bfs_distances_are_minimal((n, edges) in graph_strategy()) {
        let g = undirected(n, &edges);
        let bfs = BreadthFirstPaths::new(&g, 0).unwrap();
        let expected = brute_force_distances(n, &edges, 0);
        for v in 0..n {
            prop_assert_eq!(bfs.dist_to(v).unwrap(), expected[v]);
            if let Some(path) = bfs.path_to(v).unwrap() {
                prop_assert_eq!(Some(path.len() - 1), expected[v]);
                for pair in path.windows(2) {
                    prop_assert!(g.adjacent(pair[0]).contains(&pair[1]));
                }
            }
        }
    }

    /// Test that DFS and BFS agree on reachability
    #[test]
    fn prop_dfs_reaches_what_bfs_reaches((n, edges) in graph_strategy()) {
        let g = undirected(n, &edges);
        let bfs = BreadthFirstPaths::new(&g, 0).unwrap();
        let dfs = DepthFirstPaths::new(&g, 0).unwrap();
        let cc = ConnectedComponents::new(&g);
        for v in 0..n {
            prop_assert_eq!(bfs.has_path_to(v).unwrap(), dfs.has_path_to(v).unwrap());
            prop_assert_eq!(dfs.has_path_to(v).unwrap(), cc.connected(0, v).unwrap());
        }
    }
}
