use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Random network generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Nodes to create, ids `1..=node_count`.
    pub node_count: usize,
    /// Inclusive lower bound for generated addresses.
    pub min_address: i64,
    /// Inclusive upper bound for generated addresses.
    pub max_address: i64,
    /// Extra edge attempts per node beyond the spanning tree.
    pub extra_edge_ratio: f64,
    /// Fixed RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: constants::DEFAULT_GENERATED_NODES,
            min_address: constants::DEFAULT_MIN_ADDRESS,
            max_address: constants::DEFAULT_MAX_ADDRESS,
            extra_edge_ratio: constants::DEFAULT_EXTRA_EDGE_RATIO,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Number of extra edge attempts: `floor(node_count * extra_edge_ratio)`.
    ///
    /// The ratio is clamped to `[0, MAX_EXTRA_EDGE_RATIO]`, so the result never
    /// exceeds `node_count * MAX_EXTRA_EDGE_RATIO`.
    pub fn extra_edge_attempts(&self) -> usize {
        let ratio = if self.extra_edge_ratio.is_finite() {
            self.extra_edge_ratio.clamp(0.0, constants::MAX_EXTRA_EDGE_RATIO)
        } else {
            0.0
        };
        (self.node_count as f64 * ratio).floor() as usize
    }

    /// Validate ranges. The generator refuses to run on an invalid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count < constants::MIN_GENERATED_NODES {
            return Err(ConfigError::ValidationFailed {
                field: "generator.node_count".to_string(),
                message: format!("must be at least {}", constants::MIN_GENERATED_NODES),
            });
        }
        if self.node_count > constants::MAX_GENERATED_NODES {
            return Err(ConfigError::ValidationFailed {
                field: "generator.node_count".to_string(),
                message: format!("must be at most {}", constants::MAX_GENERATED_NODES),
            });
        }
        if self.min_address > self.max_address {
            return Err(ConfigError::ValidationFailed {
                field: "generator.min_address".to_string(),
                message: "must not exceed generator.max_address".to_string(),
            });
        }
        if !(0.0..=constants::MAX_EXTRA_EDGE_RATIO).contains(&self.extra_edge_ratio) {
            return Err(ConfigError::ValidationFailed {
                field: "generator.extra_edge_ratio".to_string(),
                message: format!("must be between 0 and {}", constants::MAX_EXTRA_EDGE_RATIO),
            });
        }
        Ok(())
    }
}
