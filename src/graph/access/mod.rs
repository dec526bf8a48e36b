//! Internal building blocks shared by the traversal algorithms.
//!
//! This module is intentionally `pub(crate)`; the visited set is an
//! implementation detail of `algorithms`.

pub(crate) mod visited;
