//! Array-backed binary min-heap of frontier edges.
//!
//! Entries are ordered by the effective weight of their edge, recomputed on
//! every comparison. Children of `i` live at `2i + 1` and `2i + 2`. There is no
//! decrease-key: callers skip stale entries after extraction.

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::types::{CostModel, Edge};

/// Candidate edge from a node already in the tree to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry<N> {
    pub start: N,
    pub end: N,
    pub edge: Edge,
}

/// Min-heap of [`HeapEntry`] keyed by effective edge weight.
///
/// Entries of equal weight come out in unspecified order.
#[derive(Debug, Clone)]
pub struct MinHeap<N> {
    entries: Vec<HeapEntry<N>>,
    model: CostModel,
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right_child(i: usize) -> usize {
    2 * i + 2
}

impl<N> MinHeap<N> {
    /// Empty heap using the default [`CostModel`].
    pub fn new() -> Self {
        Self::with_model(CostModel::default())
    }

    /// Empty heap ordering entries under `model`.
    pub fn with_model(model: CostModel) -> Self {
        Self {
            entries: Vec::new(),
            model,
        }
    }

    pub fn with_capacity(capacity: usize, model: CostModel) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            model,
        }
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Minimum entry without removing it.
    pub fn peek(&self) -> Option<&HeapEntry<N>> {
        self.entries.first()
    }

    fn weight(&self, i: usize) -> f64 {
        self.model.effective_weight(&self.entries[i].edge)
    }

    /// Insert a frontier edge and sift it up.
    pub fn push(&mut self, start: N, end: N, edge: Edge) {
        self.entries.push(HeapEntry { start, end, edge });

        let mut i = self.entries.len() - 1;
        while i > 0 && self.weight(i) < self.weight(parent(i)) {
            self.entries.swap(i, parent(i));
            i = parent(i);
        }
    }

    /// Remove and return the minimum-weight entry.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyQueue`] if the heap has no entries.
    pub fn pop_min(&mut self) -> GraphResult<HeapEntry<N>> {
        if self.entries.is_empty() {
            return Err(GraphError::EmptyQueue);
        }

        // Last entry takes the root slot
        let min = self.entries.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let mut smallest = i;
            let left = left_child(i);
            let right = right_child(i);

            if left < len && self.weight(left) < self.weight(smallest) {
                smallest = left;
            }
            if right < len && self.weight(right) < self.weight(smallest) {
                smallest = right;
            }

            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<N> Default for MinHeap<N> {
    fn default() -> Self {
        Self::new()
    }
}
