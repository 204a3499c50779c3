//! Top-level netpath configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GeneratorConfig, LoggingConfig, SelfLoopPolicy, TopologyConfig, TraversalConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`NETPATH_*`)
/// 2. Config file passed to [`NetpathConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetpathConfig {
    pub topology: TopologyConfig,
    pub traversal: TraversalConfig,
    pub generator: GeneratorConfig,
    pub logging: LoggingConfig,
}

impl NetpathConfig {
    /// Load configuration from an optional TOML file, then apply env overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `NETPATH_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Unset keys leave the value untouched.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("NETPATH_SELF_LOOPS") {
            self.topology.self_loops =
                SelfLoopPolicy::from_str_name(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    field: "topology.self_loops".to_string(),
                    message: format!("expected 'ignore' or 'allow', got '{raw}'"),
                })?;
        }
        if let Some(raw) = lookup("NETPATH_RECORD_TRACE") {
            self.traversal.record_trace = parse_env("traversal.record_trace", &raw)?;
        }
        if let Some(raw) = lookup("NETPATH_GENERATOR_SEED") {
            self.generator.seed = Some(parse_env("generator.seed", &raw)?);
        }
        if let Some(raw) = lookup("NETPATH_GENERATOR_NODES") {
            self.generator.node_count = parse_env("generator.node_count", &raw)?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::ValidationFailed {
                field: "logging.filter".to_string(),
                message: e.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        field: field.to_string(),
        message: e.to_string(),
    })
}
