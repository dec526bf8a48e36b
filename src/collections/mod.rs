//! Sequence and table primitives used by the graph layer.
//!
//! - `ring`: tail-addressed circular list, the storage behind both adapters
//! - `queue`, `stack`: FIFO / LIFO views of a ring
//! - `matrix`: growable dense table backing `AdjacencyMatrix`

pub mod matrix;
pub mod queue;
pub mod ring;
pub mod stack;

pub use matrix::Matrix;
pub use queue::Queue;
pub use ring::Ring;
pub use stack::Stack;
