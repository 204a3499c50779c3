//! # netpath-graph
//!
//! The routing engine. Owns a mutable network of addressed nodes and answers
//! path queries with a two-phase directional BFS, recording one snapshot per
//! queue pop so callers can replay the search.

pub mod engine;
pub mod flags;
pub mod generator;
pub mod network;
pub mod registry;
pub mod snapshot;
pub mod topology;
pub mod traversal;

pub use engine::NetworkEngine;
pub use flags::SearchFlags;
pub use generator::GeneratedNetwork;
pub use network::Network;
pub use registry::NodeRegistry;
pub use topology::Topology;
pub use traversal::{Direction, PathFound, Resolution, SearchFailure, TraversalEngine};
