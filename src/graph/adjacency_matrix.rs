//! Dense adjacency-matrix storage.
//!
//! A `V x V` [`Matrix`] of edge values grows by one row and one column per new
//! vertex; every new cell starts out as the graph's sentinel. Reads and writes
//! are direct cell accesses.
//!
//! # Sentinel limitation
//!
//! The matrix has no notion of "unset" separate from "equal to the sentinel".
//! An edge explicitly set to the sentinel value (for example a weight of `0`
//! on an integer graph) is indistinguishable from a missing edge: `edge`
//! returns the sentinel and [`Graph::adjacency`] skips the column. The
//! adjacency-list backend keeps such edges as explicit entries, so the two
//! backends only agree on graphs that never store the sentinel.

use super::edge_info::EdgeInfo;
use super::kind::EdgeType;
use super::traits::{Adjacent, Graph};
use crate::collections::Matrix;
use crate::error::{Error, Result};
use core::marker::PhantomData;

/// A graph stored as a dense table of edge values.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(n^2)\) | Rebuilds the table one size larger |
/// | `set_edge` | \(O(1)\) | Direct cell write (two when undirected) |
/// | `edge` | \(O(1)\) | Direct cell read |
/// | `adjacency` | \(O(n)\) total | Scans a row, skipping sentinel cells |
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<K, V, E = bool> {
    vertices: Vec<V>,
    matrix: Matrix<E>,
    default_edge_info: E,
    _kind: PhantomData<K>,
}

impl<K, V, E> AdjacencyMatrix<K, V, E>
where
    K: EdgeType,
    V: PartialEq,
    E: Clone + PartialEq,
{
    /// Creates an empty graph whose sentinel is `E`'s natural default.
    pub fn new() -> Self
    where
        E: EdgeInfo,
    {
        Self::with_default_edge_info(E::default_edge_info())
    }

    /// Creates an empty graph with an explicit "no edge" sentinel.
    pub fn with_default_edge_info(default_edge_info: E) -> Self {
        Self {
            vertices: Vec::new(),
            matrix: Matrix::empty(),
            default_edge_info,
            _kind: PhantomData,
        }
    }

    /// Walks the row of `from` starting at column `start`.
    ///
    /// The cursor is positioned on the first non-sentinel column at or after
    /// `start`, so it is either at the end or on a real edge.
    ///
    /// # Errors
    /// [`Error::VertexOutOfRange`] if `from` is out of range or `start` is past
    /// the last column.
    pub fn adjacency_from(&self, from: usize, start: usize) -> Result<MatrixAdjacency<'_, E>> {
        let from = self.check_index(from)?;
        let count = self.vertex_number();
        if start > count {
            return Err(Error::VertexOutOfRange { index: start, count });
        }
        let row = self.matrix.row(from).unwrap_or_default();
        Ok(MatrixAdjacency::new(row, &self.default_edge_info, start))
    }

    fn cell_mut(&mut self, from: usize, to: usize) -> Result<&mut E> {
        let count = self.vertices.len();
        self.matrix
            .get_mut(from, to)
            .ok_or(Error::VertexOutOfRange { index: from.max(to), count })
    }
}

impl<K, V, E> Default for AdjacencyMatrix<K, V, E>
where
    K: EdgeType,
    V: PartialEq,
    E: EdgeInfo,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E> Graph for AdjacencyMatrix<K, V, E>
where
    K: EdgeType,
    V: PartialEq,
    E: Clone + PartialEq,
{
    type Kind = K;
    type Vertex = V;
    type Edge = E;
    type Adjacency<'a>
        = MatrixAdjacency<'a, E>
    where
        Self: 'a;

    fn default_edge_info(&self) -> &E {
        &self.default_edge_info
    }

    fn vertex_number(&self) -> usize {
        self.vertices.len()
    }

    fn index_of_vertex(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(index) = self.index_of_vertex(&vertex) {
            return index;
        }
        self.vertices.push(vertex);
        let count = self.vertices.len();
        self.matrix.resize(count, count, self.default_edge_info.clone());
        log_event!(trace, count, "adjacency matrix: grown");
        count - 1
    }

    fn vertex(&self, index: usize) -> Result<&V> {
        let index = self.check_index(index)?;
        Ok(&self.vertices[index])
    }

    fn set_edge(&mut self, from: usize, to: usize, edge: E) -> Result<()> {
        let from = self.check_index(from)?;
        let to = self.check_index(to)?;
        if !K::DIRECTED {
            *self.cell_mut(to, from)? = edge.clone();
        }
        *self.cell_mut(from, to)? = edge;
        Ok(())
    }

    fn edge(&self, from: usize, to: usize) -> Result<&E> {
        let from = self.check_index(from)?;
        let to = self.check_index(to)?;
        self.matrix.get(from, to).ok_or(Error::VertexOutOfRange {
            index: from.max(to),
            count: self.vertices.len(),
        })
    }

    fn adjacency(&self, from: usize) -> Result<MatrixAdjacency<'_, E>> {
        self.adjacency_from(from, 0)
    }
}

/// Adjacency walk over one matrix row, in ascending column order, skipping
/// every cell equal to the sentinel.
#[derive(Debug, Clone)]
pub struct MatrixAdjacency<'a, E> {
    row: &'a [E],
    default_edge_info: &'a E,
    index: usize,
}

impl<'a, E: PartialEq> MatrixAdjacency<'a, E> {
    fn new(row: &'a [E], default_edge_info: &'a E, start: usize) -> Self {
        let mut cursor = Self {
            row,
            default_edge_info,
            index: start.min(row.len()),
        };
        cursor.skip_absent();
        cursor
    }

    /// The column the cursor currently points at, or `None` at the end.
    pub fn position(&self) -> Option<usize> {
        (self.index < self.row.len()).then_some(self.index)
    }

    fn skip_absent(&mut self) {
        while self
            .row
            .get(self.index)
            .is_some_and(|cell| cell == self.default_edge_info)
        {
            self.index += 1;
        }
    }
}

impl<'a, E: PartialEq> Iterator for MatrixAdjacency<'a, E> {
    type Item = Adjacent<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge_info = self.row.get(self.index)?;
        let item = Adjacent {
            to: self.index,
            edge_info,
        };
        self.index += 1;
        self.skip_absent();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.row.len() - self.index;
        (usize::from(remaining > 0), Some(remaining))
    }
}
