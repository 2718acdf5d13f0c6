//! Bounded top-K selection in a single pass.
//!
//! The buffer holds at most `k` references kept in descending rank order.
//! A candidate is inserted in front of the first occupant it outranks,
//! pushing the lowest occupant out once the buffer is full. Cost is
//! O(n * k) comparisons, which beats sorting when `k` is small.
use std::cmp::Ordering;

/// Fixed-capacity buffer of the best elements seen so far.
///
/// `comparison(a, b)` returns `Greater` when `a` ranks above `b`. The buffer
/// never breaks ties on its own: a candidate comparing `Equal` to an
/// occupant stays behind it.
pub struct TopKBuffer<'a, T, F> {
    buffer: Vec<&'a T>,
    capacity: usize,
    comparison: F,
}

impl<'a, T, F> TopKBuffer<'a, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(capacity: usize, comparison: F) -> TopKBuffer<'a, T, F> {
        TopKBuffer {
            buffer: Vec::with_capacity(capacity),
            capacity,
            comparison,
        }
    }

    pub fn push(&mut self, candidate: &'a T) {
        let comparison = &self.comparison;
        let position = self
            .buffer
            .iter()
            .position(|occupant| comparison(occupant, candidate) == Ordering::Less);
        match position {
            Some(index) => {
                if self.buffer.len() == self.capacity {
                    self.buffer.pop();
                }
                self.buffer.insert(index, candidate);
            }
            None if self.buffer.len() < self.capacity => self.buffer.push(candidate),
            None => {}
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Occupied slots, highest rank first.
    pub fn into_vec(self) -> Vec<&'a T> {
        self.buffer
    }
}

/// The `k` highest-ranking elements of `items`, highest first.
pub fn select_top_k<'a, T, F>(items: &'a [T], k: usize, comparison: F) -> Vec<&'a T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    let mut top = TopKBuffer::new(k.min(items.len()), comparison);
    for item in items {
        top.push(item);
    }
    top.into_vec()
}
