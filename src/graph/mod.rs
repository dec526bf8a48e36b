//! Graph contract, storage backends and traversals.
//!
//! - `traits`: the [`Graph`] capability set both backends implement
//! - `adjacency_list`, `adjacency_matrix`: sparse and dense storage
//! - `algorithms`: generic wrappers and whole-graph traversals
//! - `render`: plain-text adjacency tables

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod algorithms;
pub mod edge_info;
pub mod kind;
pub mod render;
pub mod traits;
pub(crate) mod access;

pub use adjacency_list::{AdjacencyList, ListAdjacency};
pub use adjacency_matrix::{AdjacencyMatrix, MatrixAdjacency};
pub use algorithms::{
    add_edge, add_edge_at, add_vertex, add_vertices, breadth_first_traverse,
    depth_first_traverse, depth_first_traverse_non_recursive, edge_info, edge_info_between,
    remove_edge, remove_edge_at, set_edge, set_edge_between, vertex, vertex_index, vertex_number,
};
pub use edge_info::{EdgeInfo, EdgeMarker};
pub use kind::{Directed, EdgeType, Undirected};
pub use traits::{Adjacent, Graph};

/// Inserts several vertices in order, converting each argument with `Into`.
///
/// ```
/// use dualgraph::add_vertices;
/// use dualgraph::graph::{AdjacencyMatrix, Directed, Graph};
///
/// let mut g: AdjacencyMatrix<Directed, String> = AdjacencyMatrix::new();
/// add_vertices!(&mut g, "a", "b", "a");
/// assert_eq!(g.vertex_number(), 2);
/// ```
#[macro_export]
macro_rules! add_vertices {
    ($graph:expr, $($vertex:expr),+ $(,)?) => {{
        let graph = $graph;
        $(
            $crate::graph::Graph::add_vertex(&mut *graph, ::core::convert::Into::into($vertex));
        )+
    }};
}
