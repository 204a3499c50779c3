//! Node registry: the set of nodes and the id → node lookup.

use std::collections::HashMap;

use netpath_core::errors::{NetpathError, NetpathResult};
use netpath_core::models::{Address, Node, NodeId};

/// Owns node identity. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: HashMap<NodeId, Node>,
    order: Vec<NodeId>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Returns `false` (and changes nothing) if `id` is already taken.
    pub fn insert(&mut self, id: NodeId, address: Address) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id, Node::new(id, address));
        self.order.push(id);
        true
    }

    /// Delete a node record. Edges must already be detached by the caller.
    pub fn remove(&mut self, id: NodeId) -> NetpathResult<Node> {
        let node = self
            .nodes
            .remove(&id)
            .ok_or(NetpathError::NodeNotFound { id })?;
        self.order.retain(|&n| n != id);
        Ok(node)
    }

    pub fn get(&self, id: NodeId) -> NetpathResult<Node> {
        self.nodes
            .get(&id)
            .copied()
            .ok_or(NetpathError::NodeNotFound { id })
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[NodeId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_noop_for_duplicate_id() {
        let mut registry = NodeRegistry::new();
        assert!(registry.insert(1, 10));
        assert!(!registry.insert(1, 99));
        assert_eq!(registry.get(1).unwrap().address, 10);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_unknown_is_not_found() {
        let mut registry = NodeRegistry::new();
        assert!(matches!(
            registry.remove(5),
            Err(NetpathError::NodeNotFound { id: 5 })
        ));
    }

    #[test]
    fn iteration_keeps_insertion_order_after_removal() {
        let mut registry = NodeRegistry::new();
        for (id, addr) in [(3, 30), (1, 10), (2, 20)] {
            registry.insert(id, addr);
        }
        registry.remove(1).unwrap();
        let ids: Vec<_> = registry.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(registry.ids(), &[3, 2]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut registry = NodeRegistry::new();
        registry.insert(1, 1);
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains(1));
    }
}
