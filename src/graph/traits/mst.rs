//! Minimum spanning tree algorithm traits.

use crate::graph::error::GraphResult;

use super::types::{MSTResult, PrimOptions};

/// Minimum spanning tree algorithms.
///
/// Finds the subset of edges that connects the nodes reachable from a start
/// node with minimum total effective weight. Only meaningful when adjacency
/// is recorded in both directions.
pub trait MSTAlgorithms<N> {
    /// Compute the minimum spanning tree using Prim's algorithm with the
    /// default cost model.
    ///
    /// Grows the tree from `start`, always admitting the cheapest edge that
    /// leaves it. Closed edges are never admitted. Nodes unreachable through
    /// usable edges are left out, which is not an error.
    ///
    /// # Complexity
    /// O(E log E) with a lazily cleaned binary heap.
    ///
    /// # Errors
    /// Returns `NodeNotFound` if `start`, or a node reached during the
    /// traversal, is not a key of the graph.
    fn prim(&self, start: &N) -> GraphResult<MSTResult<N>> {
        self.prim_with_options(start, &PrimOptions::default())
    }

    /// Prim's algorithm with explicit options.
    fn prim_with_options(&self, start: &N, options: &PrimOptions) -> GraphResult<MSTResult<N>>;
}
