//! Random connected network generation.

use netpath_core::config::GeneratorConfig;
use netpath_core::errors::{ConfigError, NetpathResult};
use netpath_core::models::{Node, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::network::Network;

/// Summary of a generated network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedNetwork {
    /// Nodes in creation order, ids `1..=node_count`.
    pub nodes: Vec<Node>,
    /// Distinct edges actually stored (duplicate attempts are not counted).
    pub edges_added: usize,
}

/// Replace the contents of `network` with a random connected network.
///
/// Every node `i + 1` is first linked to a random earlier node, which yields a
/// spanning tree; then `floor(node_count * extra_edge_ratio)` extra links are
/// attempted between distinct random nodes.
pub fn generate(network: &mut Network, config: &GeneratorConfig) -> NetpathResult<GeneratedNetwork> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    network.reset();

    let count = NodeId::try_from(config.node_count).map_err(|_| ConfigError::InvalidValue {
        field: "generator.node_count".to_string(),
        message: format!("{} does not fit a node id", config.node_count),
    })?;
    let mut nodes = Vec::with_capacity(config.node_count);
    for id in 1..=count {
        let address = rng.gen_range(config.min_address..=config.max_address);
        network.add_node(id, address);
        nodes.push(Node::new(id, address));
    }

    let mut edges_added = 0;
    for i in 1..count {
        let target = rng.gen_range(1..=i);
        if network.add_edge(i + 1, target)? {
            edges_added += 1;
        }
    }

    for _ in 0..config.extra_edge_attempts() {
        let a = rng.gen_range(1..=count);
        let b = loop {
            let candidate = rng.gen_range(1..=count);
            if candidate != a {
                break candidate;
            }
        };
        if network.add_edge(a, b)? {
            edges_added += 1;
        }
    }

    info!(
        nodes = nodes.len(),
        edges = edges_added,
        seeded = config.seed.is_some(),
        "generated random network"
    );

    Ok(GeneratedNetwork { nodes, edges_added })
}
