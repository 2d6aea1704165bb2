//! condition-mst - Minimum spanning trees over condition-assessed networks
//!
//! Connections between points of a network (inspection points in a
//! structure, for example) carry a qualitative condition state and a numeric
//! uncertainty interval instead of a fixed weight. This crate turns that
//! assessment into an effective cost and grows a minimum spanning tree over
//! it with Prim's algorithm.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          Prim traversal (graph::prim)        │
//! └───────────────┬──────────────────────────────┘
//!                 │ extract-min / push
//! ┌───────────────▼──────────────────────────────┐
//! │        Indexed min-heap (graph::MinHeap)     │
//! └───────────────┬──────────────────────────────┘
//!                 │ comparison key
//! ┌───────────────▼──────────────────────────────┐
//! │       Edge cost model (graph::CostModel)     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Cost model
//!
//! | State     | Severity | Penalty | Weight                         |
//! |-----------|----------|---------|--------------------------------|
//! | `Open`    | 0.20     | 0       | `min + 0.20 * (max - min)`     |
//! | `Cracked` | 0.65     | 2       | `min + 0.65 * (max - min) + 2` |
//! | `Closed`  | -        | -       | `+inf`, never admitted         |
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for edges, states, and cost models |
//!
//! # Example
//!
//! ```
//! use condition_mst::{ConditionState, Edge, Graph, MSTAlgorithms};
//!
//! let graph = Graph::from_edge_list(
//!     &[
//!         ("A", "B", Edge::new(2.0, 4.0, ConditionState::Open)),
//!         ("A", "C", Edge::new(1.0, 6.0, ConditionState::Cracked)),
//!         ("B", "D", Edge::new(2.0, 5.0, ConditionState::Cracked)),
//!         ("C", "D", Edge::new(1.0, 3.0, ConditionState::Open)),
//!     ],
//!     false,
//! );
//!
//! let mst = graph.prim(&"A")?;
//! assert_eq!(mst.len(), 3);
//! println!("{mst}");
//! # Ok::<(), condition_mst::GraphError>(())
//! ```

pub mod graph;

pub use graph::{
    ConditionState, CostModel, Edge, Graph, GraphError, GraphResult, HeapEntry, MSTAlgorithms,
    MSTResult, MinHeap, MstEdge, PrimOptions, StateCost, prim,
};
