//! Shared helper functions for graph algorithms.

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::types::{Edge, Graph};

/// Adjacency list of `node`, failing with `NodeNotFound` if it is not a key.
pub fn neighbors_of<'g, N>(graph: &'g Graph<N>, node: &N) -> GraphResult<&'g [(N, Edge)]>
where
    N: Eq + Hash + Clone + Debug,
{
    graph
        .neighbors(node)
        .ok_or_else(|| GraphError::node_not_found(node))
}
