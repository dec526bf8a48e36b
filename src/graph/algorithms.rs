//! Generic graph operations and traversals.
//!
//! Everything here is written purely against [`Graph`], so it runs on either
//! backend. The traversals scan the whole graph: roots are picked in
//! ascending index order among the still-unvisited vertices, so every
//! component is covered and each vertex is visited exactly once.
//!
//! | Traversal | Frontier | Callback |
//! |-----------|----------|----------|
//! | [`breadth_first_traverse`] | [`Queue`] | `(graph, parent, vertex)` |
//! | [`depth_first_traverse`] | call stack | `(graph, parent, vertex)` |
//! | [`depth_first_traverse_non_recursive`] | [`Stack`] | `(graph, vertex)` |
//!
//! `parent` is `None` for every root.
//!
//! The non-recursive depth-first walk pushes all unvisited neighbours of a
//! vertex before exploring any of them, and marks them visited at push time.
//! It therefore reports a different order than the recursive walk and has no
//! notion of a tree edge; its callback receives the vertex only.

use super::access::visited::VisitedFlags;
use super::edge_info::EdgeMarker;
use super::traits::Graph;
use crate::collections::{Queue, Stack};
use crate::error::Result;

/// Returns the number of vertices.
pub fn vertex_number<G: Graph>(graph: &G) -> usize {
    graph.vertex_number()
}

/// Looks up the index of a vertex value.
pub fn vertex_index<G: Graph>(graph: &G, vertex: &G::Vertex) -> Option<usize> {
    graph.index_of_vertex(vertex)
}

/// Returns the value of the vertex at `index`.
///
/// # Errors
/// [`crate::Error::VertexOutOfRange`] if `index` is out of range.
pub fn vertex<G: Graph>(graph: &G, index: usize) -> Result<&G::Vertex> {
    graph.vertex(index)
}

/// Inserts a vertex (idempotent) and returns its index.
pub fn add_vertex<G: Graph>(graph: &mut G, vertex: G::Vertex) -> usize {
    graph.add_vertex(vertex)
}

/// Inserts several vertices in order and returns their indices.
pub fn add_vertices<G, I>(graph: &mut G, vertices: I) -> Vec<usize>
where
    G: Graph,
    I: IntoIterator<Item = G::Vertex>,
{
    vertices
        .into_iter()
        .map(|vertex| graph.add_vertex(vertex))
        .collect()
}

/// Stores `edge` between two vertex indices.
///
/// # Errors
/// [`crate::Error::VertexOutOfRange`] if either index is out of range.
pub fn set_edge<G: Graph>(graph: &mut G, from: usize, to: usize, edge: G::Edge) -> Result<()> {
    graph.set_edge(from, to, edge)
}

/// Stores `edge` between two vertex values, inserting missing vertices.
///
/// # Errors
/// Propagates [`Graph::set_edge_between`].
pub fn set_edge_between<G: Graph>(
    graph: &mut G,
    from: G::Vertex,
    to: G::Vertex,
    edge: G::Edge,
) -> Result<()> {
    graph.set_edge_between(from, to, edge)
}

/// Connects two vertex values with the edge type's marker value.
///
/// # Errors
/// Propagates [`Graph::set_edge_between`].
pub fn add_edge<G>(graph: &mut G, from: G::Vertex, to: G::Vertex) -> Result<()>
where
    G: Graph,
    G::Edge: EdgeMarker,
{
    graph.set_edge_between(from, to, <G::Edge as EdgeMarker>::marker())
}

/// Index form of [`add_edge`].
///
/// # Errors
/// [`crate::Error::VertexOutOfRange`] if either index is out of range.
pub fn add_edge_at<G>(graph: &mut G, from: usize, to: usize) -> Result<()>
where
    G: Graph,
    G::Edge: EdgeMarker,
{
    graph.set_edge(from, to, <G::Edge as EdgeMarker>::marker())
}

/// Resets the edge between two vertex values to the sentinel.
///
/// Like every value-form write, missing vertices are inserted first.
///
/// # Errors
/// Propagates [`Graph::set_edge_between`].
pub fn remove_edge<G: Graph>(graph: &mut G, from: G::Vertex, to: G::Vertex) -> Result<()> {
    let sentinel = graph.default_edge_info().clone();
    graph.set_edge_between(from, to, sentinel)
}

/// Index form of [`remove_edge`].
///
/// # Errors
/// [`crate::Error::VertexOutOfRange`] if either index is out of range.
pub fn remove_edge_at<G: Graph>(graph: &mut G, from: usize, to: usize) -> Result<()> {
    let sentinel = graph.default_edge_info().clone();
    graph.set_edge(from, to, sentinel)
}

/// Returns the edge value between two vertex indices.
///
/// # Errors
/// [`crate::Error::VertexOutOfRange`] if either index is out of range.
pub fn edge_info<G: Graph>(graph: &G, from: usize, to: usize) -> Result<&G::Edge> {
    graph.edge(from, to)
}

/// Returns the edge value between two vertex values.
///
/// # Errors
/// [`crate::Error::VertexNotFound`] if either vertex is absent.
pub fn edge_info_between<'g, G: Graph>(
    graph: &'g G,
    from: &G::Vertex,
    to: &G::Vertex,
) -> Result<&'g G::Edge> {
    graph.edge_between(from, to)
}

/// Breadth-first traversal of the whole graph.
///
/// Vertices are marked visited when they are enqueued, so a vertex reachable
/// from several frontier members is queued once, under the first of them.
///
/// # Errors
/// Only propagates errors from the graph's adjacency walk, which cannot fail
/// for a well-formed graph.
pub fn breadth_first_traverse<G, F>(graph: &G, mut visit: F) -> Result<()>
where
    G: Graph,
    F: FnMut(&G, Option<usize>, usize),
{
    let count = graph.vertex_number();
    let mut visited = VisitedFlags::new(count);
    let mut queue: Queue<(Option<usize>, usize)> = Queue::new();

    for root in 0..count {
        if !visited.try_visit(root) {
            continue;
        }
        log_event!(debug, root, "breadth-first: new root");
        queue.enqueue((None, root));
        while !queue.is_empty() {
            let (parent, vertex) = queue.dequeue()?;
            visit(graph, parent, vertex);
            for adjacent in graph.adjacency(vertex)? {
                if visited.try_visit(adjacent.to) {
                    queue.enqueue((Some(vertex), adjacent.to));
                }
            }
        }
    }
    Ok(())
}

/// Recursive depth-first traversal of the whole graph.
///
/// Recursion depth equals the longest tree path found, which can reach the
/// vertex count on path-like graphs.
///
/// # Errors
/// Only propagates errors from the graph's adjacency walk.
pub fn depth_first_traverse<G, F>(graph: &G, mut visit: F) -> Result<()>
where
    G: Graph,
    F: FnMut(&G, Option<usize>, usize),
{
    let count = graph.vertex_number();
    let mut visited = VisitedFlags::new(count);

    for root in 0..count {
        if visited.is_visited(root) {
            continue;
        }
        log_event!(debug, root, "depth-first: new root");
        depth_first_from(graph, &mut visit, None, root, &mut visited)?;
    }
    Ok(())
}

fn depth_first_from<G, F>(
    graph: &G,
    visit: &mut F,
    parent: Option<usize>,
    vertex: usize,
    visited: &mut VisitedFlags,
) -> Result<()>
where
    G: Graph,
    F: FnMut(&G, Option<usize>, usize),
{
    debug_assert!(vertex < visited.len());
    visited.try_visit(vertex);
    visit(graph, parent, vertex);
    for adjacent in graph.adjacency(vertex)? {
        if !visited.is_visited(adjacent.to) {
            depth_first_from(graph, visit, Some(vertex), adjacent.to, visited)?;
        }
    }
    Ok(())
}

/// Depth-first traversal of the whole graph driven by an explicit [`Stack`].
///
/// # Errors
/// Only propagates errors from the graph's adjacency walk.
pub fn depth_first_traverse_non_recursive<G, F>(graph: &G, mut visit: F) -> Result<()>
where
    G: Graph,
    F: FnMut(&G, usize),
{
    let count = graph.vertex_number();
    let mut visited = VisitedFlags::new(count);
    let mut stack: Stack<usize> = Stack::new();

    for root in 0..count {
        if !visited.try_visit(root) {
            continue;
        }
        log_event!(debug, root, "depth-first (stack): new root");
        stack.push(root);
        while !stack.is_empty() {
            let vertex = stack.pop()?;
            visit(graph, vertex);
            for adjacent in graph.adjacency(vertex)? {
                if visited.try_visit(adjacent.to) {
                    stack.push(adjacent.to);
                }
            }
        }
    }
    Ok(())
}
