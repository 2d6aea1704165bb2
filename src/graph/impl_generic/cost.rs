//! Effective edge weight from a condition state and an uncertainty interval.
//!
//! Usable states interpolate linearly along `[min, max]` by the state's
//! severity and add its penalty. Closed edges weigh positive infinity, a
//! value that still orders correctly against every finite weight.

use crate::graph::traits::types::{CostModel, Edge};

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Effective weight of `edge` under `model`.
pub fn effective_weight_impl(model: &CostModel, edge: &Edge) -> f64 {
    match model.state_cost(edge.state()) {
        Some(cost) => lerp(cost.severity, edge.min(), edge.max()) + cost.penalty,
        None => f64::INFINITY,
    }
}
