use serde::{Deserialize, Serialize};

use super::node::{Address, Node, NodeId};

/// One hop of a found route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathHop {
    pub id: NodeId,
    pub address: Address,
}

impl From<Node> for PathHop {
    fn from(node: Node) -> Self {
        Self {
            id: node.id,
            address: node.address,
        }
    }
}

/// Ordered sequence of hops from search origin to destination, both inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    pub hops: Vec<PathHop>,
}

impl Route {
    pub fn new(hops: Vec<PathHop>) -> Self {
        Self { hops }
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Node ids in route order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.hops.iter().map(|h| h.id).collect()
    }
}
