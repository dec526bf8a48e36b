//! The capability set shared by both storage backends.
//!
//! Algorithms are written once against [`Graph`] and run unchanged on
//! [`AdjacencyList`](super::AdjacencyList) and
//! [`AdjacencyMatrix`](super::AdjacencyMatrix).
//!
//! # Adjacency cursors
//!
//! [`Graph::adjacency`] returns an iterator that plays the role of a
//! begin/end cursor pair: it yields the effective out-neighbours of a vertex as
//! [`Adjacent`] items and is exhausted exactly where the end cursor would sit.
//! The order is backend-defined but deterministic.

use super::kind::EdgeType;
use crate::error::{Error, Result};

/// One step of an adjacency walk: a neighbour index and the edge value
/// leading to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent<'a, E> {
    /// Index of the neighbouring vertex.
    pub to: usize,
    /// The stored edge value.
    pub edge_info: &'a E,
}

/// A graph over dense, stable vertex indices.
///
/// Vertices are identified by the order in which they were first inserted
/// (`0..vertex_number()`); indices are never reused since nothing is removed.
/// Each vertex carries a value of type [`Graph::Vertex`], and the mapping
/// from values to indices is one-to-one.
///
/// For undirected graphs every `set_edge(u, v, e)` also stores `(v, u, e)`,
/// so `edge(u, v) == edge(v, u)` always holds.
pub trait Graph {
    /// [`Directed`](super::Directed) or [`Undirected`](super::Undirected).
    type Kind: EdgeType;
    /// Value attached to each vertex.
    type Vertex: PartialEq;
    /// Value attached to each edge.
    type Edge: Clone + PartialEq;
    /// Iterator over the out-neighbours of one vertex.
    type Adjacency<'a>: Iterator<Item = Adjacent<'a, Self::Edge>>
    where
        Self: 'a;

    /// Returns true if the graph is directed.
    #[inline]
    fn is_directed(&self) -> bool {
        <Self::Kind as EdgeType>::is_directed()
    }

    /// The "no edge" sentinel, fixed at construction.
    fn default_edge_info(&self) -> &Self::Edge;

    /// Returns the number of vertices.
    fn vertex_number(&self) -> usize;

    /// Looks up the index of a vertex value.
    fn index_of_vertex(&self, vertex: &Self::Vertex) -> Option<usize>;

    /// Inserts `vertex` unless an equal value is already present.
    ///
    /// Returns the index of the (new or existing) vertex.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> usize;

    /// Returns the value of the vertex at `index`.
    ///
    /// # Errors
    /// [`Error::VertexOutOfRange`] if `index >= vertex_number()`.
    fn vertex(&self, index: usize) -> Result<&Self::Vertex>;

    /// Stores `edge` for `from -> to` (and `to -> from` when undirected).
    ///
    /// # Errors
    /// [`Error::VertexOutOfRange`] if either index is out of range; nothing
    /// is written in that case.
    fn set_edge(&mut self, from: usize, to: usize, edge: Self::Edge) -> Result<()>;

    /// Returns the edge value for `from -> to`, or the sentinel if none was set.
    ///
    /// # Errors
    /// [`Error::VertexOutOfRange`] if either index is out of range.
    fn edge(&self, from: usize, to: usize) -> Result<&Self::Edge>;

    /// Walks the effective out-neighbours of `from`.
    ///
    /// # Errors
    /// [`Error::VertexOutOfRange`] if `from` is out of range.
    fn adjacency(&self, from: usize) -> Result<Self::Adjacency<'_>>;

    /// Checks that `index` names an existing vertex.
    ///
    /// # Errors
    /// [`Error::VertexOutOfRange`] otherwise.
    #[inline]
    fn check_index(&self, index: usize) -> Result<usize> {
        let count = self.vertex_number();
        if index < count {
            Ok(index)
        } else {
            Err(Error::VertexOutOfRange { index, count })
        }
    }

    /// Like [`index_of_vertex`](Graph::index_of_vertex), but absence is an error.
    ///
    /// # Errors
    /// [`Error::VertexNotFound`] if no vertex equals `vertex`.
    #[inline]
    fn require_vertex(&self, vertex: &Self::Vertex) -> Result<usize> {
        self.index_of_vertex(vertex).ok_or(Error::VertexNotFound)
    }

    /// Value form of [`set_edge`](Graph::set_edge): both endpoints are
    /// inserted first if missing.
    ///
    /// # Errors
    /// Never fails for freshly resolved indices; the signature mirrors
    /// [`set_edge`](Graph::set_edge).
    fn set_edge_between(
        &mut self,
        from: Self::Vertex,
        to: Self::Vertex,
        edge: Self::Edge,
    ) -> Result<()> {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.set_edge(from, to, edge)
    }

    /// Value form of [`edge`](Graph::edge).
    ///
    /// # Errors
    /// [`Error::VertexNotFound`] if either endpoint is absent.
    fn edge_between(&self, from: &Self::Vertex, to: &Self::Vertex) -> Result<&Self::Edge> {
        let from = self.require_vertex(from)?;
        let to = self.require_vertex(to)?;
        self.edge(from, to)
    }

    /// Value form of [`adjacency`](Graph::adjacency).
    ///
    /// # Errors
    /// [`Error::VertexNotFound`] if `from` is absent.
    fn adjacency_of(&self, from: &Self::Vertex) -> Result<Self::Adjacency<'_>> {
        let from = self.require_vertex(from)?;
        self.adjacency(from)
    }
}
