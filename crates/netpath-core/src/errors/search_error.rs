use serde::{Deserialize, Serialize};

use crate::models::NodeId;

use super::error_code::{self, NetpathErrorCode};

/// Why a path search produced no route.
///
/// `NoPath` is an ordinary negative answer, not a fault: both endpoints
/// exist but neither direction phase reached the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchError {
    #[error("node not found: {id}")]
    UnknownNode { id: NodeId },

    #[error("no path from {origin} to {destination}")]
    NoPath { origin: NodeId, destination: NodeId },
}

impl NetpathErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownNode { .. } => error_code::NODE_NOT_FOUND,
            Self::NoPath { .. } => error_code::PATH_NOT_FOUND,
        }
    }
}
