//! # netpath-core
//!
//! Foundation crate for the netpath routing engine.
//! Defines the node, snapshot and route models, errors, config, constants, and tracing setup.
//! The graph crate and any service layer depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::NetpathConfig;
pub use errors::{NetpathError, NetpathResult, SearchError};
pub use models::{Address, EdgeView, Node, NodeId, NodeState, PathHop, Route, Snapshot, Trace};
