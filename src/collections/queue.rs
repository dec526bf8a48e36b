//! FIFO adapter over [`Ring`]: enqueue at the tail, dequeue at the head.

use super::ring::Ring;
use crate::error::{Error, Result};

/// A first-in first-out queue.
#[derive(Debug, Default)]
pub struct Queue<T> {
    ring: Ring<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self { ring: Ring::new() }
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// The oldest element, i.e. the ring's head.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue is empty.
    pub fn front(&self) -> Result<&T> {
        self.ring.front().ok_or_else(|| Error::empty("queue", "front"))
    }

    /// The newest element, i.e. the ring's tail.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue is empty.
    pub fn back(&self) -> Result<&T> {
        self.ring.back().ok_or_else(|| Error::empty("queue", "back"))
    }

    /// Appends `value` behind every queued element.
    pub fn enqueue(&mut self, value: T) -> &mut Self {
        self.ring.push_back(value);
        self
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.ring
            .pop_front()
            .map_err(|_| Error::empty("queue", "dequeue"))
    }
}
