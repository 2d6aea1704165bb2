//! Minimum spanning trees over condition-weighted graphs.
//!
//! This module provides:
//! - Edge cost model (condition state plus uncertainty interval to scalar weight)
//! - Indexed binary min-heap over frontier edges
//! - Minimum spanning tree (Prim, lazy deletion)
//! - Adjacency-list graph construction

pub mod error;
pub mod impl_generic;
mod mst;
pub mod traits;

pub use error::{GraphError, GraphResult};
pub use impl_generic::{HeapEntry, MinHeap};
pub use mst::prim;
pub use traits::*;
