use serde::{Deserialize, Serialize};

/// Unique, immutable node identity.
pub type NodeId = i64;

/// Ordinal attribute used to bias search direction. Never parsed as a real network address.
pub type Address = i64;

/// A registered node. Identity and address are fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub address: Address,
}

impl Node {
    pub fn new(id: NodeId, address: Address) -> Self {
        Self { id, address }
    }
}
