//! Sparse adjacency-list storage.
//!
//! Each vertex owns a vector of explicit `(to, edge_info)` entries. Entries are
//! appended the first time `set_edge` introduces a destination; later writes to
//! the same destination update that entry in place, so adjacency order is the
//! order in which destinations were first connected.
//!
//! Absence is simply "no entry", which means an edge whose value happens to
//! equal the sentinel is still reported by [`Graph::adjacency`].

use super::edge_info::EdgeInfo;
use super::kind::EdgeType;
use super::traits::{Adjacent, Graph};
use crate::error::Result;
use core::marker::PhantomData;
use core::slice;

/// An explicit edge entry.
#[derive(Debug, Clone, PartialEq)]
struct Entry<E> {
    to: usize,
    edge_info: E,
}

#[derive(Debug, Clone)]
struct ListVertex<V, E> {
    value: V,
    edges: Vec<Entry<E>>,
}

/// A graph stored as one out-edge list per vertex.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(n)\) | Linear scan for an equal value first |
/// | `set_edge` | \(O(\text{out-degree})\) | Scans for an existing entry |
/// | `edge` | \(O(\text{out-degree})\) | Linear scan of one list |
/// | `adjacency` | \(O(1)\) to start | Yields exactly the explicit entries |
#[derive(Debug, Clone)]
pub struct AdjacencyList<K, V, E = bool> {
    vertices: Vec<ListVertex<V, E>>,
    default_edge_info: E,
    _kind: PhantomData<K>,
}

impl<K, V, E> AdjacencyList<K, V, E>
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
            default_edge_info,
            _kind: PhantomData,
        }
    }

    /// Returns the number of explicit out-entries of `from`.
    ///
    /// # Errors
    /// [`crate::Error::VertexOutOfRange`] if `from` is out of range.
    pub fn out_degree(&self, from: usize) -> Result<usize> {
        let from = self.check_index(from)?;
        Ok(self.vertices[from].edges.len())
    }

    /// Inserts or updates the single entry `from -> to`.
    fn upsert(&mut self, from: usize, to: usize, edge_info: E) {
        let edges = &mut self.vertices[from].edges;
        match edges.iter_mut().find(|entry| entry.to == to) {
            Some(entry) => entry.edge_info = edge_info,
            None => edges.push(Entry { to, edge_info }),
        }
    }
}

impl<K, V, E> Default for AdjacencyList<K, V, E>
where
    K: EdgeType,
    V: PartialEq,
    E: EdgeInfo,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E> Graph for AdjacencyList<K, V, E>
where
    K: EdgeType,
    V: PartialEq,
    E: Clone + PartialEq,
{
    type Kind = K;
    type Vertex = V;
    type Edge = E;
    type Adjacency<'a>
        = ListAdjacency<'a, E>
    where
        Self: 'a;

    fn default_edge_info(&self) -> &E {
        &self.default_edge_info
    }

    fn vertex_number(&self) -> usize {
        self.vertices.len()
    }

    fn index_of_vertex(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v.value == *vertex)
    }

    fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(index) = self.index_of_vertex(&vertex) {
            return index;
        }
        self.vertices.push(ListVertex {
            value: vertex,
            edges: Vec::new(),
        });
        let index = self.vertices.len() - 1;
        log_event!(trace, index, "adjacency list: vertex added");
        index
    }

    fn vertex(&self, index: usize) -> Result<&V> {
        let index = self.check_index(index)?;
        Ok(&self.vertices[index].value)
    }

    fn set_edge(&mut self, from: usize, to: usize, edge: E) -> Result<()> {
        let from = self.check_index(from)?;
        let to = self.check_index(to)?;
        if K::DIRECTED || from == to {
            self.upsert(from, to, edge);
        } else {
            self.upsert(from, to, edge.clone());
            self.upsert(to, from, edge);
        }
        Ok(())
    }

    fn edge(&self, from: usize, to: usize) -> Result<&E> {
        let from = self.check_index(from)?;
        let to = self.check_index(to)?;
        Ok(self.vertices[from]
            .edges
            .iter()
            .find(|entry| entry.to == to)
            .map_or(&self.default_edge_info, |entry| &entry.edge_info))
    }

    fn adjacency(&self, from: usize) -> Result<ListAdjacency<'_, E>> {
        let from = self.check_index(from)?;
        Ok(ListAdjacency {
            entries: self.vertices[from].edges.iter(),
        })
    }
}

/// Adjacency walk over the explicit entries of one vertex, in insertion order.
#[derive(Debug, Clone)]
pub struct ListAdjacency<'a, E> {
    entries: slice::Iter<'a, Entry<E>>,
}

impl<'a, E> Iterator for ListAdjacency<'a, E> {
    type Item = Adjacent<'a, E>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| Adjacent {
            to: entry.to,
            edge_info: &entry.edge_info,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<E> ExactSizeIterator for ListAdjacency<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::{Directed, Undirected};

    fn neighbours<G: Graph>(g: &G, from: usize) -> Vec<(usize, G::Edge)> {
        g.adjacency(from)
            .unwrap()
            .map(|a| (a.to, a.edge_info.clone()))
            .collect()
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut g: AdjacencyList<Directed, &str> = AdjacencyList::new();
        assert_eq!(g.add_vertex("a"), 0);
        assert_eq!(g.add_vertex("b"), 1);
        assert_eq!(g.add_vertex("a"), 0);
        assert_eq!(g.vertex_number(), 2);
        assert_eq!(g.vertex(1), Ok(&"b"));
        assert_eq!(g.index_of_vertex(&"c"), None);
    }

    #[test]
    fn test_update_in_place_keeps_order() {
        let mut g: AdjacencyList<Directed, u32, i32> = AdjacencyList::new();
        for v in 0..4 {
            g.add_vertex(v);
        }
        g.set_edge(0, 3, 7).unwrap();
        g.set_edge(0, 1, 5).unwrap();
        g.set_edge(0, 3, 9).unwrap();
        assert_eq!(neighbours(&g, 0), vec![(3, 9), (1, 5)]);
        assert_eq!(g.out_degree(0), Ok(2));
        assert_eq!(g.edge(0, 3), Ok(&9));
        assert_eq!(g.edge(3, 0), Ok(&0));
    }

    #[test]
    fn test_undirected_mirrors_updates() {
        let mut g: AdjacencyList<Undirected, char, i32> = AdjacencyList::new();
        g.set_edge_between('x', 'y', 4).unwrap();
        assert_eq!(g.edge_between(&'y', &'x'), Ok(&4));

        // Updating an existing entry still reaches the mirror.
        g.set_edge_between('x', 'y', 6).unwrap();
        assert_eq!(g.edge(1, 0), Ok(&6));
        assert_eq!(neighbours(&g, 1), vec![(0, 6)]);
    }

    #[test]
    fn test_self_loop_single_entry() {
        let mut g: AdjacencyList<Undirected, u8, i32> = AdjacencyList::new();
        g.add_vertex(0);
        g.set_edge(0, 0, 3).unwrap();
        assert_eq!(neighbours(&g, 0), vec![(0, 3)]);
    }

    #[test]
    fn test_sentinel_valued_edge_stays_visible() {
        let mut g: AdjacencyList<Directed, u8, i32> = AdjacencyList::new();
        g.add_vertex(0);
        g.add_vertex(1);
        g.set_edge(0, 1, 0).unwrap();
        assert_eq!(neighbours(&g, 0), vec![(1, 0)]);
    }

    #[test]
    fn test_missing_edge_does_not_create_entry() {
        let mut g: AdjacencyList<Directed, u8> = AdjacencyList::new();
        g.add_vertex(0);
        g.add_vertex(1);
        assert_eq!(g.edge(0, 1), Ok(&false));
        assert_eq!(g.out_degree(0), Ok(0));
    }

    #[test]
    fn test_out_of_range() {
        let mut g: AdjacencyList<Undirected, u8, f64> = AdjacencyList::new();
        g.add_vertex(0);
        let err = Error::VertexOutOfRange { index: 1, count: 1 };
        assert_eq!(g.set_edge(0, 1, 1.0), Err(err.clone()));
        assert_eq!(g.edge(1, 0), Err(err.clone()));
        assert_eq!(g.vertex(1), Err(err.clone()));
        assert!(g.adjacency(1).is_err());
        assert_eq!(g.edge_between(&0, &9), Err(Error::VertexNotFound));
        assert!(g.adjacency_of(&9).is_err());
        // A rejected write leaves no half-mirrored entry behind.
        assert_eq!(g.out_degree(0), Ok(0));
    }

    #[test]
    fn test_custom_sentinel() {
        let mut g: AdjacencyList<Directed, u8, i32> = AdjacencyList::with_default_edge_info(-1);
        g.add_vertex(0);
        assert_eq!(g.default_edge_info(), &-1);
        assert_eq!(g.edge(0, 0), Ok(&-1));
        assert!(g.is_directed());
    }
}
