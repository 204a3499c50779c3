//! Network: the owned aggregate of registry, topology and last-search flags.

use netpath_core::config::TopologyConfig;
use netpath_core::errors::NetpathResult;
use netpath_core::models::{Address, Node, NodeId, PathHop, Route, Snapshot};
use tracing::debug;

use crate::flags::SearchFlags;
use crate::registry::NodeRegistry;
use crate::snapshot;
use crate::topology::Topology;

/// One independent network instance.
///
/// Not synchronized; wrap in [`crate::NetworkEngine`] to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Network {
    registry: NodeRegistry,
    topology: Topology,
    /// Flags left behind by the most recent search, rendered by [`Network::snapshot`].
    flags: SearchFlags,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &TopologyConfig) -> Self {
        Self {
            registry: NodeRegistry::new(),
            topology: Topology::new(config.self_loops),
            flags: SearchFlags::new(),
        }
    }

    /// Add a node. Silently ignored if `id` exists; returns whether it was added.
    pub fn add_node(&mut self, id: NodeId, address: Address) -> bool {
        let added = self.registry.insert(id, address);
        if added {
            self.topology.attach(id);
        } else {
            debug!(node = id, "add_node ignored, id already registered");
        }
        added
    }

    /// Remove a node and every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> NetpathResult<Node> {
        let node = self.topology.remove_node_cascade(&mut self.registry, id)?;
        self.flags.forget(id);
        Ok(node)
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> NetpathResult<bool> {
        self.topology.add_edge(&self.registry, a, b)
    }

    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> NetpathResult<bool> {
        self.topology.remove_edge(&self.registry, a, b)
    }

    /// Current state including the flags of the last search.
    pub fn snapshot(&self) -> Snapshot {
        snapshot::capture(&self.registry, &self.topology, &self.flags)
    }

    /// Current state rendered with an arbitrary flag set.
    pub fn snapshot_with(&self, flags: &SearchFlags) -> Snapshot {
        snapshot::capture(&self.registry, &self.topology, flags)
    }

    pub fn node(&self, id: NodeId) -> NetpathResult<Node> {
        self.registry.get(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.registry.contains(id)
    }

    pub fn neighbors(&self, id: NodeId) -> NetpathResult<&[NodeId]> {
        self.registry.get(id)?;
        Ok(self.topology.neighbors(id))
    }

    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn flags(&self) -> &SearchFlags {
        &self.flags
    }

    pub(crate) fn set_flags(&mut self, flags: SearchFlags) {
        self.flags = flags;
    }

    /// Resolve ids to hops. Ids no longer registered are skipped.
    pub fn route(&self, ids: &[NodeId]) -> Route {
        Route::new(
            ids.iter()
                .filter_map(|&id| self.registry.get(id).ok())
                .map(PathHop::from)
                .collect(),
        )
    }

    /// Drop all nodes, edges and flags. The self-loop policy is kept.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.topology.clear();
        self.flags.clear();
    }
}
