//! Results of a path search.

use netpath_core::errors::SearchError;
use netpath_core::models::{Route, Trace};
use serde::Serialize;

use super::Direction;

/// How a successful search was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "direction", rename_all = "snake_case")]
pub enum Resolution {
    /// Source and destination are the same node; no BFS ran.
    SamePoint,
    /// The named direction phase reached the destination.
    Phase(Direction),
}

/// A route plus the full trace that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathFound {
    pub path: Route,
    pub trace: Trace,
    pub resolution: Resolution,
}

/// A search that ended without a route. Always carries the trace recorded so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{reason}")]
pub struct SearchFailure {
    pub reason: SearchError,
    pub trace: Trace,
}

impl SearchFailure {
    pub fn is_no_path(&self) -> bool {
        matches!(self.reason, SearchError::NoPath { .. })
    }
}
