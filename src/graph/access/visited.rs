//! Visited set for whole-graph traversals.
//!
//! One flag per vertex index, sized once from `vertex_number()` when the
//! traversal starts.

/// A per-node visited flag vector.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.flags[idx]
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        !core::mem::replace(&mut self.flags[idx], true)
    }
}
