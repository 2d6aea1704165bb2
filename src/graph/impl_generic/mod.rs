//! Generic implementations of the graph algorithms.

mod cost;
mod heap;
mod helpers;
mod mst;

pub use cost::effective_weight_impl;
pub use heap::{HeapEntry, MinHeap};
pub use helpers::neighbors_of;
pub use mst::prim_impl;
