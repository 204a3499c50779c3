//! Topology store: undirected adjacency between registered node ids.

use std::collections::HashMap;

use netpath_core::config::SelfLoopPolicy;
use netpath_core::errors::NetpathResult;
use netpath_core::models::{Node, NodeId};
use tracing::debug;

use crate::registry::NodeRegistry;

/// Adjacency lists keyed by node id.
///
/// Invariants: the relation is symmetric, no pair appears twice, and every id
/// stored here is present in the [`NodeRegistry`] the store is used with.
/// Neighbor order is edge insertion order.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    self_loops: SelfLoopPolicy,
}

impl Topology {
    pub fn new(self_loops: SelfLoopPolicy) -> Self {
        Self {
            adjacency: HashMap::new(),
            self_loops,
        }
    }

    /// Create an empty adjacency record for a freshly registered node.
    pub fn attach(&mut self, id: NodeId) {
        self.adjacency.entry(id).or_default();
    }

    /// Connect `a` and `b`. Returns `true` if a new edge was stored.
    pub fn add_edge(&mut self, registry: &NodeRegistry, a: NodeId, b: NodeId) -> NetpathResult<bool> {
        registry.get(a)?;
        registry.get(b)?;

        if a == b {
            return Ok(match self.self_loops {
                SelfLoopPolicy::Ignore => {
                    debug!(node = a, "self-loop ignored");
                    false
                }
                SelfLoopPolicy::Allow => {
                    let list = self.adjacency.entry(a).or_default();
                    if list.contains(&a) {
                        false
                    } else {
                        list.push(a);
                        true
                    }
                }
            });
        }

        if self.are_adjacent(a, b) {
            return Ok(false);
        }
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        Ok(true)
    }

    /// Disconnect `a` and `b`. Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, registry: &NodeRegistry, a: NodeId, b: NodeId) -> NetpathResult<bool> {
        registry.get(a)?;
        registry.get(b)?;

        let removed_ab = self.unlink(a, b);
        let removed_ba = a != b && self.unlink(b, a);
        Ok(removed_ab || removed_ba)
    }

    /// Detach `id` from every neighbor, drop its adjacency record, then remove it from `registry`.
    pub fn remove_node_cascade(&mut self, registry: &mut NodeRegistry, id: NodeId) -> NetpathResult<Node> {
        registry.get(id)?;

        for (&owner, list) in self.adjacency.iter_mut() {
            if owner != id {
                list.retain(|&n| n != id);
            }
        }
        self.adjacency.remove(&id);
        registry.remove(id)
    }

    /// Neighbors of `id` in edge insertion order. Unknown ids have none.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b) || self.neighbors(b).contains(&a)
    }

    /// Number of undirected edges, self-loops counted once.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(&owner, list)| list.iter().filter(|&&n| owner <= n).count())
            .sum()
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    fn unlink(&mut self, from: NodeId, to: NodeId) -> bool {
        match self.adjacency.get_mut(&from) {
            Some(list) => match list.iter().position(|&n| n == to) {
                Some(pos) => {
                    list.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        }
    }
}
