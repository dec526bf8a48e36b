//! `Ring` — a circular singly linked list addressed through its tail.
//!
//! The only handle the ring keeps is `tail`. The tail's `next` link is always
//! the head, which makes push-front, push-back and pop-front O(1) without ever
//! shifting storage:
//!
//! ```text
//!   tail ──► [c] ──next──► [a] ──► [b] ──► [c]
//!                          head
//! ```
//!
//! Nodes live in an index arena (`Vec<Slot<T>>`). Popped slots are threaded
//! onto a free list and handed out again by later pushes, so a ring that is
//! used as a queue in steady state stops allocating.

use crate::error::{Error, Result};
use core::fmt;
use core::mem;

/// A slot in the node arena.
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { value: T, next: usize },
    Free(Option<usize>),
}

/// A circular singly linked sequence with O(1) access to both ends.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `push_front` | \(O(1)\) amortized | Tail handle unchanged |
/// | `push_back` | \(O(1)\) amortized | New node becomes the tail |
/// | `pop_front` | \(O(1)\) | Slot returned to the free list |
/// | `len` | \(O(1)\) | Counter kept alongside the links |
/// | `clear` | \(O(n)\) | Drops every value |
pub struct Ring<T> {
    slots: Vec<Slot<T>>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Ring<T> {
    /// Creates an empty ring.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty ring with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Returns the head element.
    pub fn front(&self) -> Option<&T> {
        let tail = self.tail?;
        Some(self.value(self.next(tail)))
    }

    /// Returns the tail element.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|tail| self.value(tail))
    }

    /// Inserts `value` as the new head. The tail stays where it is, unless the
    /// ring was empty, in which case the new node is its own tail.
    pub fn push_front(&mut self, value: T) {
        match self.tail {
            None => self.tail = Some(self.alloc_self_linked(value)),
            Some(tail) => {
                self.link_after(tail, value);
            }
        }
        self.len += 1;
    }

    /// Inserts `value` as the new tail.
    pub fn push_back(&mut self, value: T) {
        let node = match self.tail {
            None => self.alloc_self_linked(value),
            Some(tail) => self.link_after(tail, value),
        };
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the head element.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] if the ring is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let tail = self.tail.ok_or_else(|| Error::empty("ring", "pop_front"))?;
        let head = self.next(tail);
        if head == tail {
            self.tail = None;
        } else {
            let after_head = self.next(head);
            self.set_next(tail, after_head);
        }
        self.len -= 1;
        Ok(self.free(head))
    }

    /// Releases every node and restores the empty ring.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Iterates from the head, stopping after one full cycle.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            current: self.tail.map(|tail| self.next(tail)),
            remaining: self.len,
        }
    }

    /// Allocates a node whose `next` is the current head and splices it in
    /// right after `tail`. Returns the new node's slot.
    fn link_after(&mut self, tail: usize, value: T) -> usize {
        let head = self.next(tail);
        let node = self.alloc(value, head);
        self.set_next(tail, node);
        node
    }

    fn alloc_self_linked(&mut self, value: T) -> usize {
        let node = self.alloc(value, 0);
        self.set_next(node, node);
        node
    }

    fn alloc(&mut self, value: T, next: usize) -> usize {
        let occupied = Slot::Occupied { value, next };
        match self.free_head {
            Some(idx) => {
                let previous = mem::replace(&mut self.slots[idx], occupied);
                self.free_head = match previous {
                    Slot::Free(next_free) => next_free,
                    Slot::Occupied { .. } => panic!("ring free list points at an occupied slot"),
                };
                idx
            }
            None => {
                self.slots.push(occupied);
                self.slots.len() - 1
            }
        }
    }

    /// Moves the value out of `idx` and puts the slot on the free list.
    /// Links into `idx` must already have been redirected.
    fn free(&mut self, idx: usize) -> T {
        let slot = mem::replace(&mut self.slots[idx], Slot::Free(self.free_head));
        self.free_head = Some(idx);
        match slot {
            Slot::Occupied { value, .. } => value,
            Slot::Free(_) => panic!("ring node {idx} freed twice"),
        }
    }

    fn next(&self, idx: usize) -> usize {
        match &self.slots[idx] {
            Slot::Occupied { next, .. } => *next,
            Slot::Free(_) => panic!("free slot {idx} linked into ring"),
        }
    }

    fn set_next(&mut self, idx: usize, to: usize) {
        match &mut self.slots[idx] {
            Slot::Occupied { next, .. } => *next = to,
            Slot::Free(_) => panic!("free slot {idx} linked into ring"),
        }
    }

    fn value(&self, idx: usize) -> &T {
        match &self.slots[idx] {
            Slot::Occupied { value, .. } => value,
            Slot::Free(_) => panic!("free slot {idx} linked into ring"),
        }
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Builds a ring whose head is the first item.
impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Ring::new();
        ring.extend(iter);
        ring
    }
}

impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail iterator over a [`Ring`].
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.current?;
        self.remaining -= 1;
        self.current = Some(self.ring.next(idx));
        Some(self.ring.value(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
