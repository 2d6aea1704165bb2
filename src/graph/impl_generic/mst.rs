//! Minimum spanning tree via Prim's algorithm with lazy deletion.
//!
//! The frontier is a [`MinHeap`] of candidate edges. Entries whose end node
//! was reached after they were pushed are discarded when popped instead of
//! being removed in place. Closed edges are never pushed.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::graph::error::GraphResult;
use crate::graph::traits::types::{Graph, MSTResult, MstEdge, PrimOptions};

use super::heap::MinHeap;
use super::helpers::neighbors_of;

/// Prim's minimum spanning tree grown from `start`.
///
/// Covers only the component reachable from `start` through finite-weight
/// edges; unreachable nodes are absent from the result.
///
/// Time: O(E log E), since stale entries stay in the heap until popped.
#[tracing::instrument(level = "debug", skip(graph, options), fields(nodes = graph.num_nodes()))]
pub fn prim_impl<N>(graph: &Graph<N>, start: &N, options: &PrimOptions) -> GraphResult<MSTResult<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    let start_neighbors = neighbors_of(graph, start)?;

    let model = &options.cost_model;
    let mut mst = MSTResult::new();
    let mut heap = MinHeap::with_model(*model);
    let mut visited: HashSet<N> = HashSet::with_capacity(graph.num_nodes());
    visited.insert(start.clone());

    for (neighbor, edge) in start_neighbors {
        if model.effective_weight(edge).is_finite() {
            heap.push(start.clone(), neighbor.clone(), *edge);
        }
    }

    while !heap.is_empty() && visited.len() < graph.num_nodes() {
        let entry = heap.pop_min()?;
        if visited.contains(&entry.end) {
            trace!(start = ?entry.start, end = ?entry.end, "discarding stale frontier entry");
            continue;
        }

        let weight = model.effective_weight(&entry.edge);
        trace!(start = ?entry.start, end = ?entry.end, weight, "admitting edge");
        visited.insert(entry.end.clone());

        for (neighbor, edge) in neighbors_of(graph, &entry.end)? {
            if !visited.contains(neighbor) && model.effective_weight(edge).is_finite() {
                heap.push(entry.end.clone(), neighbor.clone(), *edge);
            }
        }

        mst.total_weight += weight;
        mst.edges.push(MstEdge {
            start: entry.start,
            end: entry.end,
            edge: entry.edge,
        });
    }

    debug!(
        edges = mst.len(),
        visited = visited.len(),
        partial = visited.len() < graph.num_nodes(),
        total_weight = mst.total_weight,
        "prim finished"
    );

    Ok(mst)
}
