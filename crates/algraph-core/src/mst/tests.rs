use super::*;
use crate::graph::EdgeWeightedGraph;
use proptest::prelude::*;

fn weighted(vertices: usize, edges: &[(usize, usize, f64)]) -> EdgeWeightedGraph {
    let mut g = EdgeWeightedGraph::new(vertices);
    for &(v, w, weight) in edges {
        g.add_edge(v, w, weight).unwrap();
    }
    g
}

fn endpoints(mst: &impl MinimumSpanningTree) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = mst
        .edges()
        .iter()
        .map(|e| {
            let (v, w) = e.endpoints();
            (v.min(w), v.max(w))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

/// Eight vertices, sixteen edges; the minimum spanning tree weighs 1.81
fn eight_vertex_graph() -> EdgeWeightedGraph {
    weighted(
        8,
        &[
            (4, 5, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (0, 7, 0.16),
            (1, 5, 0.32),
            (0, 4, 0.38),
            (2, 3, 0.17),
            (1, 7, 0.19),
            (0, 2, 0.26),
            (1, 2, 0.36),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
}

#[test]
fn test_kruskal_on_triangle() {
    let g = weighted(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
    let mst = Kruskal::new(&g).unwrap();
    assert_eq!(mst.weight(), 3.0);
    assert_eq!(endpoints(&mst), vec![(0, 1), (1, 2)]);
}

#[test]
fn test_prim_variants_on_triangle() {
    let g = weighted(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
    let lazy = LazyPrim::new(&g).unwrap();
    let eager = EagerPrim::new(&g).unwrap();
    assert_eq!(lazy.weight(), 3.0);
    assert_eq!(eager.weight(), 3.0);
    assert_eq!(endpoints(&lazy), vec![(0, 1), (1, 2)]);
    assert_eq!(endpoints(&eager), vec![(0, 1), (1, 2)]);
}

#[test]
fn test_all_algorithms_find_the_same_tree() {
    let g = eight_vertex_graph();
    let expected = vec![(0, 2), (0, 7), (1, 7), (2, 3), (2, 6), (4, 5), (5, 7)];

    let lazy = LazyPrim::new(&g).unwrap();
    let eager = EagerPrim::new(&g).unwrap();
    let kruskal = Kruskal::new(&g).unwrap();
    for (name, tree) in [
        ("lazy", endpoints(&lazy)),
        ("eager", endpoints(&eager)),
        ("kruskal", endpoints(&kruskal)),
    ] {
        assert_eq!(tree, expected, "{name} tree differs");
    }
    assert!((lazy.weight() - 1.81).abs() < 1e-9);
    assert!((eager.weight() - 1.81).abs() < 1e-9);
    assert!((kruskal.weight() - 1.81).abs() < 1e-9);
}

#[test]
fn test_kruskal_edges_ascend() {
    let kruskal = Kruskal::new(&eight_vertex_graph()).unwrap();
    let weights: Vec<f64> = kruskal.edges().iter().map(|e| e.weight()).collect();
    assert!(weights.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_disconnected_graph_yields_forest() {
    let g = weighted(
        6,
        &[(0, 1, 2.0), (1, 2, 1.0), (0, 2, 5.0), (3, 4, 4.0), (4, 4, 0.5)],
    );
    let lazy = LazyPrim::new(&g).unwrap();
    let eager = EagerPrim::new(&g).unwrap();
    let kruskal = Kruskal::new(&g).unwrap();

    let expected = vec![(0, 1), (1, 2), (3, 4)];
    assert_eq!(endpoints(&lazy), expected);
    assert_eq!(endpoints(&eager), expected);
    assert_eq!(endpoints(&kruskal), expected);
    assert_eq!(kruskal.weight(), 7.0);
}

#[test]
fn test_empty_and_single_vertex_graphs() {
    for vertices in [0, 1] {
        let g = EdgeWeightedGraph::new(vertices);
        assert!(LazyPrim::new(&g).unwrap().edges().is_empty());
        assert!(EagerPrim::new(&g).unwrap().edges().is_empty());
        assert!(Kruskal::new(&g).unwrap().edges().is_empty());
        for weight in [
            LazyPrim::new(&g).unwrap().weight(),
            EagerPrim::new(&g).unwrap().weight(),
            Kruskal::new(&g).unwrap().weight(),
        ] {
            assert_eq!(weight, 0.0);
            assert!(weight.is_sign_positive());
        }
    }
}

#[test]
fn test_equal_weights_prefer_earlier_edges() {
    let g = weighted(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]);
    assert_eq!(endpoints(&Kruskal::new(&g).unwrap()), vec![(0, 1), (1, 2)]);
    assert_eq!(endpoints(&LazyPrim::new(&g).unwrap()), vec![(0, 1), (1, 2)]);
}

#[test]
fn test_updated_weight_changes_tree() {
    let mut g = weighted(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
    g.set_weight(2, 0.5).unwrap();
    let mst = Kruskal::new(&g).unwrap();
    assert_eq!(endpoints(&mst), vec![(0, 1), (0, 2)]);
    assert_eq!(mst.weight(), 1.5);
}

fn weighted_graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u8)>)> {
    (1_usize..9).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, any::<u8>()), 0..24),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Test that all three algorithms agree on total weight and forest size.
    /// Integer weights keep the sums exact.
    #[test]
    fn prop_algorithms_agree_on_weight((n, raw) in weighted_graph_strategy()) {
        let edges: Vec<(usize, usize, f64)> =
            raw.iter().map(|&(v, w, x)| (v, w, f64::from(x))).collect();
        let g = weighted(n, &edges);

        let lazy = LazyPrim::new(&g).unwrap();
        let eager = EagerPrim::new(&g).unwrap();
        let kruskal = Kruskal::new(&g).unwrap();

        prop_assert_eq!(lazy.weight(), kruskal.weight());
        prop_assert_eq!(eager.weight(), kruskal.weight());
        prop_assert_eq!(lazy.edges().len(), kruskal.edges().len());
        prop_assert_eq!(eager.edges().len(), kruskal.edges().len());

        // forest edges = vertices - components
        let components = crate::traversal::ConnectedComponents::new(&g).count();
        prop_assert_eq!(kruskal.edges().len(), n - components);
    }
}
