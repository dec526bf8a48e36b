use dualgraph::graph::{
    add_edge, add_vertices, breadth_first_traverse, depth_first_traverse,
    depth_first_traverse_non_recursive, AdjacencyList, AdjacencyMatrix, Directed, Graph,
    Undirected,
};

const VERTICES: [&str; 8] = ["v1", "v2", "v3", "v4", "v5", "v6", "v7", "v8"];

fn build<G: Graph<Vertex = &'static str, Edge = bool>>(mut g: G) -> G {
    add_vertices(&mut g, VERTICES);
    for (from, to) in [
        ("v1", "v2"),
        ("v1", "v3"),
        ("v2", "v4"),
        ("v2", "v5"),
        ("v8", "v4"),
        ("v8", "v5"),
        ("v3", "v6"),
        ("v3", "v7"),
        ("v6", "v7"),
    ] {
        add_edge(&mut g, from, to).unwrap();
    }
    g
}

type Tree = Vec<(Option<&'static str>, &'static str)>;

fn bfs<G: Graph<Vertex = &'static str>>(g: &G) -> Tree {
    let mut out = Vec::new();
    breadth_first_traverse(g, |g, parent, v| {
        out.push((parent.map(|p| *g.vertex(p).unwrap()), *g.vertex(v).unwrap()));
    })
    .unwrap();
    out
}

fn dfs<G: Graph<Vertex = &'static str>>(g: &G) -> Tree {
    let mut out = Vec::new();
    depth_first_traverse(g, |g, parent, v| {
        out.push((parent.map(|p| *g.vertex(p).unwrap()), *g.vertex(v).unwrap()));
    })
    .unwrap();
    out
}

fn dfs_stack<G: Graph<Vertex = &'static str>>(g: &G) -> Vec<&'static str> {
    let mut out = Vec::new();
    depth_first_traverse_non_recursive(g, |g, v| out.push(*g.vertex(v).unwrap())).unwrap();
    out
}

fn check_undirected<G: Graph<Vertex = &'static str, Edge = bool>>(g: G) {
    let g = build(g);
    assert_eq!(
        bfs(&g),
        vec![
            (None, "v1"),
            (Some("v1"), "v2"),
            (Some("v1"), "v3"),
            (Some("v2"), "v4"),
            (Some("v2"), "v5"),
            (Some("v3"), "v6"),
            (Some("v3"), "v7"),
            (Some("v4"), "v8"),
        ]
    );
    assert_eq!(
        dfs(&g),
        vec![
            (None, "v1"),
            (Some("v1"), "v2"),
            (Some("v2"), "v4"),
            (Some("v4"), "v8"),
            (Some("v8"), "v5"),
            (Some("v1"), "v3"),
            (Some("v3"), "v6"),
            (Some("v6"), "v7"),
        ]
    );
    assert_eq!(
        dfs_stack(&g),
        vec!["v1", "v3", "v7", "v6", "v2", "v5", "v8", "v4"]
    );
}

fn check_directed<G: Graph<Vertex = &'static str, Edge = bool>>(g: G) {
    let g = build(g);
    assert_eq!(
        bfs(&g),
        vec![
            (None, "v1"),
            (Some("v1"), "v2"),
            (Some("v1"), "v3"),
            (Some("v2"), "v4"),
            (Some("v2"), "v5"),
            (Some("v3"), "v6"),
            (Some("v3"), "v7"),
            (None, "v8"),
        ]
    );
    assert_eq!(
        dfs(&g),
        vec![
            (None, "v1"),
            (Some("v1"), "v2"),
            (Some("v2"), "v4"),
            (Some("v2"), "v5"),
            (Some("v1"), "v3"),
            (Some("v3"), "v6"),
            (Some("v6"), "v7"),
            (None, "v8"),
        ]
    );
    assert_eq!(
        dfs_stack(&g),
        vec!["v1", "v3", "v7", "v6", "v2", "v5", "v4", "v8"]
    );
}

#[test]
fn undirected_matrix_scenario() {
    check_undirected(AdjacencyMatrix::<Undirected, &str>::new());
}

#[test]
fn undirected_list_scenario() {
    check_undirected(AdjacencyList::<Undirected, &str>::new());
}

#[test]
fn directed_matrix_scenario() {
    check_directed(AdjacencyMatrix::<Directed, &str>::new());
}

#[test]
fn directed_list_scenario() {
    check_directed(AdjacencyList::<Directed, &str>::new());
}

#[test]
fn every_vertex_visited_once_across_components() {
    let mut g: AdjacencyList<Undirected, u32, u8> = AdjacencyList::new();
    add_vertices(&mut g, 0..10);
    for (a, b) in [(0, 1), (2, 3), (3, 4), (7, 9)] {
        g.set_edge(a, b, 1).unwrap();
    }

    let mut roots = Vec::new();
    let mut seen = vec![0; 10];
    depth_first_traverse(&g, |_, parent, v| {
        seen[v] += 1;
        if parent.is_none() {
            roots.push(v);
        }
    })
    .unwrap();
    assert!(seen.iter().all(|&n| n == 1));
    assert_eq!(roots, vec![0, 2, 5, 6, 7, 8]);
}
