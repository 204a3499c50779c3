//! Plain data exchanged between the engine and its callers.

pub mod node;
pub mod route;
pub mod snapshot;

pub use node::{Address, Node, NodeId};
pub use route::{PathHop, Route};
pub use snapshot::{EdgeView, NodeState, Snapshot, Trace};
