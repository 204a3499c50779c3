//! Point-in-time projections of the whole network, and the trace that strings them together.

use serde::{Deserialize, Serialize};

use crate::errors::NetpathResult;

use super::node::{Address, NodeId};

/// A node as it appears in a snapshot, including its search flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    pub id: NodeId,
    pub address: Address,
    pub visited: bool,
    pub in_path: bool,
}

/// An undirected edge, emitted once from its lower-id endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeView {
    pub source: NodeId,
    pub target: NodeId,
}

/// Immutable, fully-materialized view of all nodes and edges at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub nodes: Vec<NodeState>,
    pub edges: Vec<EdgeView>,
}

impl Snapshot {
    pub fn node(&self, id: NodeId) -> Option<&NodeState> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Ids flagged visited, in snapshot order.
    pub fn visited_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().filter(|n| n.visited).map(|n| n.id).collect()
    }

    /// Ids flagged in-path, in snapshot order.
    pub fn in_path_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().filter(|n| n.in_path).map(|n| n.id).collect()
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges
            .iter()
            .any(|e| (e.source == a && e.target == b) || (e.source == b && e.target == a))
    }

    /// Serialize to the `{ nodes, edges }` JSON shape.
    pub fn to_json(&self) -> NetpathResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Ordered snapshots produced over the lifetime of one path search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    pub snapshots: Vec<Snapshot>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}
