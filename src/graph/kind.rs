//! Directedness markers.
//!
//! Directedness is a type parameter of every graph so that the mirroring of
//! undirected edges is resolved at compile time.

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// `true` for directed graphs.
    const DIRECTED: bool;

    /// Returns true if the graph is directed.
    #[inline(always)]
    fn is_directed() -> bool {
        Self::DIRECTED
    }
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl EdgeType for Directed {
    const DIRECTED: bool = true;
}

impl EdgeType for Undirected {
    const DIRECTED: bool = false;
}
