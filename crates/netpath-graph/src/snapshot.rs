//! Snapshot recorder: a pure projection of registry + topology + flags.

use netpath_core::models::{EdgeView, NodeState, Snapshot};

use crate::flags::SearchFlags;
use crate::registry::NodeRegistry;
use crate::topology::Topology;

/// Materialize the current network state. Has no side effects.
///
/// Nodes appear in registry insertion order. Each undirected edge is emitted
/// exactly once, from its lower-id endpoint.
pub fn capture(registry: &NodeRegistry, topology: &Topology, flags: &SearchFlags) -> Snapshot {
    let nodes = registry
        .iter()
        .map(|node| NodeState {
            id: node.id,
            address: node.address,
            visited: flags.is_visited(node.id),
            in_path: flags.is_in_path(node.id),
        })
        .collect();

    let mut edges = Vec::with_capacity(topology.edge_count());
    for node in registry.iter() {
        for &neighbor in topology.neighbors(node.id) {
            if node.id <= neighbor {
                edges.push(EdgeView {
                    source: node.id,
                    target: neighbor,
                });
            }
        }
    }

    Snapshot { nodes, edges }
}
