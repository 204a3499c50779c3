//! NetworkEngine: thread-safe owner of one network and the traversal engine.
//!
//! All mutations and searches are serialized behind a single `RwLock`; plain
//! snapshot reads share it. Traces handed back are owned values, so callers may
//! serialize them without holding the lock.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use netpath_core::config::{GeneratorConfig, NetpathConfig};
use netpath_core::errors::{NetpathError, NetpathResult};
use netpath_core::models::{Address, NodeId, Snapshot};
use tracing::{debug, info, instrument};

use crate::generator::{self, GeneratedNetwork};
use crate::network::Network;
use crate::traversal::{PathFound, SearchFailure, TraversalEngine};

/// The service-facing routing engine.
#[derive(Debug)]
pub struct NetworkEngine {
    network: RwLock<Network>,
    traversal: TraversalEngine,
    generator: GeneratorConfig,
}

impl NetworkEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::with_config(&NetpathConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: &NetpathConfig) -> Self {
        Self {
            network: RwLock::new(Network::with_config(&config.topology)),
            traversal: TraversalEngine::new(config.traversal.clone()),
            generator: config.generator.clone(),
        }
    }

    fn read(&self) -> NetpathResult<RwLockReadGuard<'_, Network>> {
        self.network
            .read()
            .map_err(|e| NetpathError::Concurrency(e.to_string()))
    }

    fn write(&self) -> NetpathResult<RwLockWriteGuard<'_, Network>> {
        self.network
            .write()
            .map_err(|e| NetpathError::Concurrency(e.to_string()))
    }

    // --- Mutation ---

    /// Add a node. An existing id is left as is.
    pub fn add_node(&self, id: NodeId, address: Address) -> NetpathResult<()> {
        self.write()?.add_node(id, address);
        Ok(())
    }

    pub fn remove_node(&self, id: NodeId) -> NetpathResult<()> {
        let node = self.write()?.remove_node(id)?;
        debug!(node = node.id, "node removed");
        Ok(())
    }

    pub fn add_edge(&self, a: NodeId, b: NodeId) -> NetpathResult<()> {
        self.write()?.add_edge(a, b)?;
        Ok(())
    }

    pub fn remove_edge(&self, a: NodeId, b: NodeId) -> NetpathResult<()> {
        self.write()?.remove_edge(a, b)?;
        Ok(())
    }

    /// Clear all nodes, edges and flags.
    pub fn reset(&self) -> NetpathResult<()> {
        self.write()?.reset();
        info!("network reset");
        Ok(())
    }

    // --- Queries ---

    pub fn snapshot(&self) -> NetpathResult<Snapshot> {
        Ok(self.read()?.snapshot())
    }

    /// Run the two-phase search. The outer result fails only if the lock is poisoned.
    #[instrument(skip(self))]
    pub fn find_path(
        &self,
        source: NodeId,
        dest: NodeId,
    ) -> NetpathResult<Result<PathFound, SearchFailure>> {
        let mut network = self.write()?;
        Ok(self.traversal.find_path(&mut network, source, dest))
    }

    pub fn node_count(&self) -> NetpathResult<usize> {
        Ok(self.read()?.node_count())
    }

    pub fn edge_count(&self) -> NetpathResult<usize> {
        Ok(self.read()?.edge_count())
    }

    // --- Generation ---

    /// Replace the network with a random connected one.
    pub fn generate_random(&self, config: &GeneratorConfig) -> NetpathResult<GeneratedNetwork> {
        generator::generate(&mut *self.write()?, config)
    }

    /// Replace the network using the generator settings the engine was built with.
    pub fn generate_default(&self) -> NetpathResult<GeneratedNetwork> {
        self.generate_random(&self.generator)
    }
}

impl Default for NetworkEngine {
    fn default() -> Self {
        Self::new()
    }
}
