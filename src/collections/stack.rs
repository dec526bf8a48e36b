//! LIFO adapter over [`Ring`]: push and pop both at the head.

use super::ring::Ring;
use crate::error::{Error, Result};

/// A last-in first-out stack.
#[derive(Debug, Default)]
pub struct Stack<T> {
    ring: Ring<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { ring: Ring::new() }
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the number of stacked elements.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// The most recently pushed element.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the stack is empty.
    pub fn top(&self) -> Result<&T> {
        self.ring.front().ok_or_else(|| Error::empty("stack", "top"))
    }

    /// Pushes `value` on top.
    pub fn push(&mut self, value: T) -> &mut Self {
        self.ring.push_front(value);
        self
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.ring
            .pop_front()
            .map_err(|_| Error::empty("stack", "pop"))
    }
}
