//! Adjacency-list graph.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Edge, TransportGraph};
use crate::core::{NodeId, Transport};

/// Most stops have a handful of connections; keep them inline.
type EdgeList = SmallVec<[Edge; 8]>;

/// In-memory transport graph backed by adjacency lists.
///
/// ## Example
///
/// ```
/// use rust_pursuit::core::{NodeId, Transport};
/// use rust_pursuit::graph::{AdjacencyGraph, TransportGraph};
///
/// let graph = AdjacencyGraph::builder()
///     .link(1, 2, Transport::Taxi)
///     .link(2, 3, Transport::Bus)
///     .build();
///
/// assert_eq!(graph.edges_from(NodeId::new(2)).len(), 2);
/// assert!(graph.contains(NodeId::new(3)));
/// assert!(!graph.contains(NodeId::new(4)));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    adjacency: FxHashMap<NodeId, EdgeList>,
}

impl AdjacencyGraph {
    /// Start building a graph.
    #[must_use]
    pub fn builder() -> AdjacencyGraphBuilder {
        AdjacencyGraphBuilder::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(SmallVec::len).sum()
    }

    /// Iterate over all nodes (unordered).
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }
}

impl TransportGraph for AdjacencyGraph {
    fn edges_from(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map(|edges| edges.as_slice()).unwrap_or(&[])
    }

    fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Builder for `AdjacencyGraph`.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraphBuilder {
    graph: AdjacencyGraph,
}

impl AdjacencyGraphBuilder {
    /// Add a node with no edges.
    #[must_use]
    pub fn node(mut self, node: impl Into<NodeId>) -> Self {
        self.graph.adjacency.entry(node.into()).or_default();
        self
    }

    /// Add a one-way edge.
    #[must_use]
    pub fn edge(mut self, from: impl Into<NodeId>, to: impl Into<NodeId>, transport: Transport) -> Self {
        let (from, to) = (from.into(), to.into());
        self.graph.adjacency.entry(to).or_default();
        let edges = self.graph.adjacency.entry(from).or_default();
        let edge = Edge::new(to, transport);
        if !edges.contains(&edge) {
            edges.push(edge);
        }
        self
    }

    /// Add an edge in both directions.
    #[must_use]
    pub fn link(self, a: impl Into<NodeId>, b: impl Into<NodeId>, transport: Transport) -> Self {
        let (a, b) = (a.into(), b.into());
        self.edge(a, b, transport).edge(b, a, transport)
    }

    #[must_use]
    pub fn build(self) -> AdjacencyGraph {
        self.graph
    }
}
