use crate::models::NodeId;

use super::config_error::ConfigError;
use super::error_code::{self, NetpathErrorCode};

/// Top-level error for registry, topology and engine operations.
#[derive(Debug, thiserror::Error)]
pub enum NetpathError {
    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("concurrency error: {0}")]
    Concurrency(String),
}

pub type NetpathResult<T> = Result<T, NetpathError>;

impl NetpathErrorCode for NetpathError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NodeNotFound { .. } => error_code::NODE_NOT_FOUND,
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::Concurrency(_) => error_code::CONCURRENCY_ERROR,
        }
    }
}
