//! Minimum spanning tree algorithms over adjacency-list graphs.

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::error::GraphResult;
use crate::graph::impl_generic::prim_impl;
use crate::graph::traits::mst::MSTAlgorithms;
use crate::graph::traits::types::{Graph, MSTResult, PrimOptions};

impl<N> MSTAlgorithms<N> for Graph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn prim_with_options(&self, start: &N, options: &PrimOptions) -> GraphResult<MSTResult<N>> {
        prim_impl(self, start, options)
    }
}

/// Prim's minimum spanning tree of `graph` grown from `start`.
pub fn prim<N>(graph: &Graph<N>, start: &N) -> GraphResult<MSTResult<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    graph.prim(start)
}
