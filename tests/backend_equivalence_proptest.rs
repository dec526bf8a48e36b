use dualgraph::graph::{
    breadth_first_traverse, depth_first_traverse, depth_first_traverse_non_recursive,
    AdjacencyList, AdjacencyMatrix, Directed, EdgeType, Graph, Undirected,
};
use proptest::prelude::*;

/// Edge writes `(from, to, weight)` over `n` vertices. Weights start at 1 so
/// the integer sentinel `0` is never stored.
fn graph_ops() -> impl Strategy<Value = (usize, Vec<(usize, usize, i32)>)> {
    (1usize..12).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n, 1i32..10), 0..40);
        (Just(n), edges)
    })
}

fn apply<G: Graph<Vertex = usize, Edge = i32>>(g: &mut G, n: usize, ops: &[(usize, usize, i32)]) {
    for v in 0..n {
        g.add_vertex(v);
    }
    for &(from, to, w) in ops {
        g.set_edge(from, to, w).unwrap();
    }
}

/// Orders the writes so that every adjacency list receives its destinations
/// in ascending order, which is the order the matrix backend iterates in.
fn ascending<K: EdgeType>(ops: &[(usize, usize, i32)]) -> Vec<(usize, usize, i32)> {
    let mut ops: Vec<_> = ops
        .iter()
        .map(|&(a, b, w)| if K::DIRECTED { (a, b, w) } else { (a.min(b), a.max(b), w) })
        .collect();
    ops.sort_by_key(|&(a, b, _)| (a, b));
    ops
}

type Trace = (Vec<(Option<usize>, usize)>, Vec<(Option<usize>, usize)>, Vec<usize>);

fn traces<G: Graph>(g: &G) -> Trace {
    let mut bfs = Vec::new();
    breadth_first_traverse(g, |_, p, v| bfs.push((p, v))).unwrap();
    let mut dfs = Vec::new();
    depth_first_traverse(g, |_, p, v| dfs.push((p, v))).unwrap();
    let mut dfs_stack = Vec::new();
    depth_first_traverse_non_recursive(g, |_, v| dfs_stack.push(v)).unwrap();
    (bfs, dfs, dfs_stack)
}

fn check_equivalence<K: EdgeType>(n: usize, ops: &[(usize, usize, i32)]) {
    let mut list: AdjacencyList<K, usize, i32> = AdjacencyList::new();
    let mut matrix: AdjacencyMatrix<K, usize, i32> = AdjacencyMatrix::new();
    apply(&mut list, n, ops);
    apply(&mut matrix, n, ops);

    assert_eq!(list.vertex_number(), matrix.vertex_number());
    for u in 0..n {
        for v in 0..n {
            assert_eq!(list.edge(u, v), matrix.edge(u, v), "edge ({u}, {v})");
            if !K::DIRECTED {
                assert_eq!(list.edge(u, v), list.edge(v, u), "list symmetry ({u}, {v})");
                assert_eq!(matrix.edge(u, v), matrix.edge(v, u), "matrix symmetry ({u}, {v})");
            }
        }
    }

    let ordered = ascending::<K>(ops);
    let mut list: AdjacencyList<K, usize, i32> = AdjacencyList::new();
    let mut matrix: AdjacencyMatrix<K, usize, i32> = AdjacencyMatrix::new();
    apply(&mut list, n, &ordered);
    apply(&mut matrix, n, &ordered);
    assert_eq!(traces(&list), traces(&matrix));
}

proptest! {
    #[test]
    fn directed_backends_agree((n, ops) in graph_ops()) {
        check_equivalence::<Directed>(n, &ops);
    }

    #[test]
    fn undirected_backends_agree((n, ops) in graph_ops()) {
        check_equivalence::<Undirected>(n, &ops);
    }

    #[test]
    fn traversals_visit_each_vertex_once((n, ops) in graph_ops()) {
        let mut g: AdjacencyList<Directed, usize, i32> = AdjacencyList::new();
        apply(&mut g, n, &ops);
        let (bfs, dfs, dfs_stack) = traces(&g);
        for order in [
            bfs.iter().map(|&(_, v)| v).collect::<Vec<_>>(),
            dfs.iter().map(|&(_, v)| v).collect(),
            dfs_stack,
        ] {
            let mut sorted = order.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn add_vertex_is_idempotent(values in proptest::collection::vec(0u8..20, 0..50)) {
        let mut g: AdjacencyMatrix<Undirected, u8, f64> = AdjacencyMatrix::new();
        for v in values {
            let before = g.vertex_number();
            let first = g.add_vertex(v);
            let after = g.vertex_number();
            prop_assert_eq!(g.add_vertex(v), first);
            prop_assert_eq!(g.vertex_number(), after);
            prop_assert!(after == before || after == before + 1);
            prop_assert_eq!(g.vertex(first), Ok(&v));
        }
    }

    #[test]
    fn untouched_pairs_read_the_sentinel((n, ops) in graph_ops()) {
        let mut g: AdjacencyList<Directed, usize, i32> = AdjacencyList::new();
        apply(&mut g, n, &ops);
        for u in 0..n {
            for v in 0..n {
                if !ops.iter().any(|&(a, b, _)| a == u && b == v) {
                    prop_assert_eq!(g.edge(u, v), Ok(g.default_edge_info()));
                }
            }
        }
    }
}
