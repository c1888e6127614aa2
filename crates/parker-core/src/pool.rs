//! Bounded min-heap of free slot ids.
//!
//! The heap is stored implicitly in a `Vec` (parent at `(i - 1) / 2`,
//! children at `2i + 1` and `2i + 2`). A dense membership table indexed by
//! `id - 1` gives O(1) duplicate detection on insert.

use crate::error::PoolError;
use crate::model::SlotId;

/// Pool of currently free slot ids that always yields the lowest one first.
#[derive(Debug, Clone)]
pub struct SlotIdPool {
    heap: Vec<SlotId>,
    present: Vec<bool>,
    capacity: usize,
}

impl SlotIdPool {
    /// Create a pool seeded with `1..=capacity`.
    ///
    /// An ascending sequence already satisfies the heap property, so no
    /// sifting is needed here.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: (1..=capacity).collect(),
            present: vec![true; capacity],
            capacity,
        }
    }

    /// Maximum number of ids the pool can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of free ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `id` is currently free.
    #[must_use]
    pub fn contains(&self, id: SlotId) -> bool {
        id >= 1 && self.present.get(id - 1).copied().unwrap_or(false)
    }

    /// Lowest free id without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<SlotId> {
        self.heap.first().copied()
    }

    /// Free ids in heap order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.heap.iter().copied()
    }

    /// Remove and return the lowest free id.
    pub fn extract_min(&mut self) -> Result<SlotId, PoolError> {
        if self.heap.is_empty() {
            return Err(PoolError::Empty);
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop().ok_or(PoolError::Empty)?;
        self.sift_down(0);
        self.present[min - 1] = false;
        Ok(min)
    }

    /// Return a previously extracted id to the pool.
    ///
    /// Fails without touching the pool when it is already full, when `id` is
    /// outside `[1, capacity]`, or when `id` is already free.
    pub fn insert(&mut self, id: SlotId) -> Result<(), PoolError> {
        if self.heap.len() == self.capacity {
            return Err(PoolError::Full {
                capacity: self.capacity,
            });
        }
        if !(1..=self.capacity).contains(&id) {
            return Err(PoolError::OutOfRange {
                id,
                capacity: self.capacity,
            });
        }
        if self.present[id - 1] {
            return Err(PoolError::DuplicateId(id));
        }

        self.heap.push(id);
        self.sift_up(self.heap.len() - 1);
        self.present[id - 1] = true;
        Ok(())
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.heap[right] < self.heap[left] {
                right
            } else {
                left
            };
            if self.heap[smaller] < self.heap[index] {
                self.heap.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index] < self.heap[parent] {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn is_heap_ordered(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2] < self.heap[i])
    }
}
