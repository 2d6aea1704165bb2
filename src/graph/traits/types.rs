//! Graph data types, cost configuration, and result structures.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::impl_generic::effective_weight_impl;

/// Condition assessment of a connection between two points.
///
/// The discriminants are the stable integer codes used when a state is
/// exchanged as a number (see [`ConditionState::code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum ConditionState {
    /// Fully usable.
    Open = 1,
    /// Impassable.
    Closed = 2,
    /// Degraded but usable.
    Cracked = 3,
}

impl ConditionState {
    /// Integer code of this state.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Cracked => "Cracked",
        }
    }
}

impl TryFrom<u8> for ConditionState {
    type Error = GraphError;

    fn try_from(code: u8) -> GraphResult<Self> {
        match code {
            1 => Ok(Self::Open),
            2 => Ok(Self::Closed),
            3 => Ok(Self::Cracked),
            _ => Err(GraphError::UnmappedState { code }),
        }
    }
}

impl From<ConditionState> for u8 {
    fn from(state: ConditionState) -> Self {
        state.code()
    }
}

impl fmt::Display for ConditionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A connection between two nodes with a condition assessment.
///
/// `min` and `max` bound an uncertainty interval. The effective weight is
/// derived from `(state, min, max)` on every request and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    min: f64,
    max: f64,
    state: ConditionState,
}

impl Edge {
    /// Create an edge without validating the interval.
    ///
    /// `min > max` is accepted and yields a negative interpolation span.
    pub const fn new(min: f64, max: f64, state: ConditionState) -> Self {
        Self { min, max, state }
    }

    /// Create an edge, rejecting non-finite bounds and `min > max`.
    pub fn try_new(min: f64, max: f64, state: ConditionState) -> GraphResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GraphError::InvalidEdge {
                min,
                max,
                reason: "bounds must be finite".to_string(),
            });
        }
        if min > max {
            return Err(GraphError::InvalidEdge {
                min,
                max,
                reason: "min must not exceed max".to_string(),
            });
        }
        Ok(Self::new(min, max, state))
    }

    pub const fn min(&self) -> f64 {
        self.min
    }

    pub const fn max(&self) -> f64 {
        self.max
    }

    pub const fn state(&self) -> ConditionState {
        self.state
    }

    /// Whether this edge can never be part of a spanning tree.
    pub fn is_closed(&self) -> bool {
        self.state == ConditionState::Closed
    }

    /// Effective weight under the default [`CostModel`].
    ///
    /// Positive infinity for closed edges.
    pub fn effective_weight(&self) -> f64 {
        effective_weight_impl(&CostModel::default(), self)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.min, self.max, self.state)
    }
}

/// Cost parameters of one usable condition state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCost {
    /// Interpolation parameter along `[min, max]`.
    pub severity: f64,
    /// Additive penalty applied after interpolation.
    pub penalty: f64,
}

impl StateCost {
    pub const fn new(severity: f64, penalty: f64) -> Self {
        Self { severity, penalty }
    }
}

/// Per-state cost table turning an [`Edge`] into a scalar weight.
///
/// Closed edges have no entry: their weight is always positive infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    open: StateCost,
    cracked: StateCost,
}

impl CostModel {
    /// Create a cost model.
    ///
    /// Severities must lie within `[0, 1]` and penalties must be finite and
    /// non-negative.
    pub fn new(open: StateCost, cracked: StateCost) -> GraphResult<Self> {
        validate_state_cost("open", &open)?;
        validate_state_cost("cracked", &cracked)?;
        Ok(Self { open, cracked })
    }

    /// Cost parameters for `state`, `None` for [`ConditionState::Closed`].
    pub fn state_cost(&self, state: ConditionState) -> Option<StateCost> {
        match state {
            ConditionState::Open => Some(self.open),
            ConditionState::Cracked => Some(self.cracked),
            ConditionState::Closed => None,
        }
    }

    /// Effective weight of `edge` under this model.
    pub fn effective_weight(&self, edge: &Edge) -> f64 {
        effective_weight_impl(self, edge)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            open: StateCost::new(0.20, 0.0),
            cracked: StateCost::new(0.65, 2.0),
        }
    }
}

fn validate_state_cost(state: &str, cost: &StateCost) -> GraphResult<()> {
    if !cost.severity.is_finite() || !(0.0..=1.0).contains(&cost.severity) {
        return Err(GraphError::InvalidParameter {
            parameter: format!("{state}.severity"),
            message: format!("expected a value in [0, 1], got {}", cost.severity),
        });
    }
    if !cost.penalty.is_finite() || cost.penalty < 0.0 {
        return Err(GraphError::InvalidParameter {
            parameter: format!("{state}.penalty"),
            message: format!("expected a finite non-negative value, got {}", cost.penalty),
        });
    }
    Ok(())
}

/// Options for Prim's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrimOptions {
    /// Cost model used to order frontier edges.
    pub cost_model: CostModel,
}

/// Adjacency-list graph keyed by opaque node identifiers.
///
/// Adjacency is directed: an undirected connection is two entries, one per
/// direction ([`Graph::add_undirected_edge`] does this). Node iteration and
/// display follow insertion order.
///
/// # Construction
///
/// ```
/// use condition_mst::{ConditionState, Edge, Graph};
///
/// let graph = Graph::from_edge_list(
///     &[
///         ("A", "B", Edge::new(2.0, 4.0, ConditionState::Open)),
///         ("A", "C", Edge::new(1.0, 6.0, ConditionState::Cracked)),
///     ],
///     false,
/// );
/// assert_eq!(graph.num_nodes(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    adjacency: HashMap<N, Vec<(N, Edge)>>,
}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Build a graph from `(start, end, edge)` triples.
    ///
    /// Every endpoint is registered as a node. Undirected graphs get both
    /// directions of every triple.
    pub fn from_edge_list(edges: &[(N, N, Edge)], directed: bool) -> Self {
        let mut graph = Self::new();
        for (start, end, edge) in edges {
            if directed {
                graph.add_edge(start.clone(), end.clone(), *edge);
            } else {
                graph.add_undirected_edge(start.clone(), end.clone(), *edge);
            }
        }
        graph
    }

    /// Build a graph from adjacency lists taken as given.
    ///
    /// Neighbors are not registered as nodes, so lists may reference nodes
    /// that have no entry of their own.
    pub fn from_adjacency<I>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<(N, Edge)>)>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in adjacency {
            graph.add_node(node.clone());
            if let Some(list) = graph.adjacency.get_mut(&node) {
                list.extend(neighbors);
            }
        }
        graph
    }

    /// Register `node`. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.nodes.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Append a directed adjacency entry `start -> end`.
    pub fn add_edge(&mut self, start: N, end: N, edge: Edge) {
        self.add_node(start.clone());
        self.add_node(end.clone());
        if let Some(list) = self.adjacency.get_mut(&start) {
            list.push((end, edge));
        }
    }

    /// Append adjacency entries in both directions.
    pub fn add_undirected_edge(&mut self, a: N, b: N, edge: Edge) {
        self.add_edge(a.clone(), b.clone(), edge);
        self.add_edge(b, a, edge);
    }

    /// Adjacency list of `node`, `None` if it is not a key of the graph.
    pub fn neighbors(&self, node: &N) -> Option<&[(N, Edge)]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }
}

impl<N: Eq + Hash + Clone> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash + Clone> FromIterator<(N, Vec<(N, Edge)>)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<(N, Edge)>)>>(iter: I) -> Self {
        Self::from_adjacency(iter)
    }
}

impl<N: Eq + Hash + Clone + fmt::Display> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for node in &self.nodes {
            write!(f, "  {node}: [")?;
            for (i, (neighbor, edge)) in self.neighbors(node).unwrap_or(&[]).iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{neighbor} {edge}")?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "}}")
    }
}

/// An edge admitted into a spanning tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MstEdge<N> {
    /// Node already in the tree when the edge was admitted.
    pub start: N,
    /// Node reached by the edge.
    pub end: N,
    pub edge: Edge,
}

/// Result of minimum spanning tree algorithms.
#[derive(Debug, Clone, PartialEq)]
pub struct MSTResult<N> {
    /// Tree edges in admission order.
    pub edges: Vec<MstEdge<N>>,
    /// Sum of the effective weights of the admitted edges.
    pub total_weight: f64,
}

impl<N> MSTResult<N> {
    pub(crate) fn new() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MstEdge<N>> {
        self.edges.iter()
    }
}

impl<N: Eq + Hash> MSTResult<N> {
    /// Every node touched by an admitted edge.
    pub fn nodes(&self) -> HashSet<&N> {
        self.edges
            .iter()
            .flat_map(|e| [&e.start, &e.end])
            .collect()
    }
}

impl<'a, N> IntoIterator for &'a MSTResult<N> {
    type Item = &'a MstEdge<N>;
    type IntoIter = std::slice::Iter<'a, MstEdge<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: fmt::Display> fmt::Display for MSTResult<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for e in &self.edges {
            writeln!(f, "  {} --{}-> {}", e.start, e.edge, e.end)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_codes() {
        for state in [
            ConditionState::Open,
            ConditionState::Closed,
            ConditionState::Cracked,
        ] {
            assert_eq!(ConditionState::try_from(state.code()), Ok(state));
        }
        assert_eq!(ConditionState::Cracked.code(), 3);
        assert_eq!(
            ConditionState::try_from(0),
            Err(GraphError::UnmappedState { code: 0 })
        );
        assert_eq!(
            ConditionState::try_from(4),
            Err(GraphError::UnmappedState { code: 4 })
        );
    }

    #[test]
    fn test_edge_try_new() {
        assert!(Edge::try_new(1.0, 1.0, ConditionState::Open).is_ok());
        assert!(matches!(
            Edge::try_new(5.0, 2.0, ConditionState::Open),
            Err(GraphError::InvalidEdge { .. })
        ));
        assert!(Edge::try_new(f64::NEG_INFINITY, 2.0, ConditionState::Cracked).is_err());
        assert!(Edge::try_new(0.0, f64::NAN, ConditionState::Closed).is_err());
    }

    #[test]
    fn test_from_edge_list() {
        let edge = Edge::new(1.0, 2.0, ConditionState::Open);
        let undirected = Graph::from_edge_list(&[(1, 2, edge), (2, 3, edge)], false);
        assert_eq!(undirected.num_nodes(), 3);
        assert_eq!(undirected.nodes().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(undirected.neighbors(&2).map(<[_]>::len), Some(2));

        let directed = Graph::from_edge_list(&[(1, 2, edge), (2, 3, edge)], true);
        assert_eq!(directed.num_nodes(), 3);
        assert_eq!(directed.neighbors(&2).map(<[_]>::len), Some(1));
        assert_eq!(directed.neighbors(&3).map(<[_]>::len), Some(0));
        assert!(directed.neighbors(&4).is_none());
    }

    #[test]
    fn test_from_adjacency_keeps_lists() {
        let edge = Edge::new(1.0, 2.0, ConditionState::Cracked);
        let graph: Graph<&str> = [("A", vec![("B", edge), ("C", edge)])].into_iter().collect();
        assert_eq!(graph.num_nodes(), 1);
        assert!(!graph.contains_node(&"B"));
        assert_eq!(graph.neighbors(&"A").map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_graph_display() {
        let mut graph = Graph::new();
        graph.add_undirected_edge("A", "B", Edge::new(2.0, 4.0, ConditionState::Open));
        graph.add_node("C");
        assert!(!graph.add_node("C"));
        assert_eq!(
            graph.to_string(),
            "{\n  A: [B (2, 4, Open)]\n  B: [A (2, 4, Open)]\n  C: []\n}"
        );
    }
}
