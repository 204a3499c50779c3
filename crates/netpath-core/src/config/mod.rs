//! Configuration system for netpath.
//! TOML-based, resolved as: env > config file > compiled defaults.

pub mod generator_config;
pub mod logging_config;
pub mod netpath_config;
pub mod topology_config;
pub mod traversal_config;

pub use generator_config::GeneratorConfig;
pub use logging_config::LoggingConfig;
pub use netpath_config::NetpathConfig;
pub use topology_config::{SelfLoopPolicy, TopologyConfig};
pub use traversal_config::TraversalConfig;
