//! Transport graph collaborator.
//!
//! The engine only ever reads the graph: which edges leave a node, which
//! nodes exist, and whether there are any nodes at all. `TransportGraph`
//! is that contract; `AdjacencyGraph` is an in-memory implementation.

pub mod adjacency;

pub use adjacency::{AdjacencyGraph, AdjacencyGraphBuilder};

use serde::{Deserialize, Serialize};

use crate::core::{NodeId, Transport};

/// An outgoing edge: where it goes and what runs along it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub destination: NodeId,
    pub transport: Transport,
}

impl Edge {
    #[must_use]
    pub const fn new(destination: NodeId, transport: Transport) -> Self {
        Self {
            destination,
            transport,
        }
    }
}

/// Read-only view of the transport graph.
///
/// ## Implementation Notes
///
/// - `edges_from`: return an empty slice for unknown nodes
/// - Parallel edges with different transports are expected (a taxi and a
///   bus between the same two stops)
/// - Self-loops are not expected
pub trait TransportGraph {
    /// Edges leaving `node`.
    fn edges_from(&self, node: NodeId) -> &[Edge];

    /// Check if `node` exists.
    fn contains(&self, node: NodeId) -> bool;

    /// Check if the graph has no nodes.
    fn is_empty(&self) -> bool;
}

impl<G: TransportGraph + ?Sized> TransportGraph for &G {
    fn edges_from(&self, node: NodeId) -> &[Edge] {
        (**self).edges_from(node)
    }

    fn contains(&self, node: NodeId) -> bool {
        (**self).contains(node)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}
