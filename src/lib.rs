//! # `dualgraph` - Graphs over Interchangeable Storage
//!
//! Generic graphs with two storage backends that honour one contract, plus
//! traversals written once against that contract.
//!
//! ## Architecture
//!
//! 1. **Collections** (`collections`):
//!    - [`Ring`]: circular singly linked list addressed by its tail, with O(1)
//!      push-front, push-back and pop-front
//!    - [`Queue`] / [`Stack`]: FIFO / LIFO adapters over [`Ring`]
//!    - [`Matrix`]: dense row-major table that can be resized in place
//!
//! 2. **Graph contract** ([`graph::Graph`]):
//!    - dense, stable vertex indices assigned in first-insertion order
//!    - a per-instance "no edge" sentinel ([`graph::EdgeInfo`])
//!    - directedness as a type parameter ([`graph::Directed`] / [`graph::Undirected`])
//!    - an adjacency iterator yielding `(neighbour, edge value)` pairs
//!
//! 3. **Backends**:
//!    - [`graph::AdjacencyList`]: explicit entries, insertion-ordered adjacency
//!    - [`graph::AdjacencyMatrix`]: dense table, ascending adjacency, sentinel cells skipped
//!
//! 4. **Algorithms** ([`graph::algorithms`]): breadth-first, recursive
//!    depth-first and stack-driven depth-first traversal over whole graphs.
//!
//! ## Example
//!
//! ```rust
//! use dualgraph::graph::{add_edge, breadth_first_traverse, AdjacencyList, Undirected};
//!
//! let mut g: AdjacencyList<Undirected, &str> = AdjacencyList::new();
//! add_edge(&mut g, "a", "b").unwrap();
//! add_edge(&mut g, "a", "c").unwrap();
//!
//! let mut order = Vec::new();
//! breadth_first_traverse(&g, |_, parent, v| order.push((parent, v))).unwrap();
//! assert_eq!(order, vec![(None, 0), (Some(0), 1), (Some(0), 2)]);
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, vertex insertion, matrix growth and
//! traversal root restarts are emitted as `tracing` events.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{Matrix, Queue, Ring, Stack};
pub use error::{Error, Result};
pub use graph::{AdjacencyList, AdjacencyMatrix, Directed, Graph, Undirected};
