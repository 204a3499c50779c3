/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "NETPATH_LOG";

/// Filter used when `NETPATH_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "netpath=info";

/// Default number of nodes in a generated network.
pub const DEFAULT_GENERATED_NODES: usize = 5;

/// Smallest network the generator will build.
pub const MIN_GENERATED_NODES: usize = 2;

/// Largest network the generator will build.
pub const MAX_GENERATED_NODES: usize = 100_000;

/// Default inclusive address range for generated nodes.
pub const DEFAULT_MIN_ADDRESS: i64 = 1;
pub const DEFAULT_MAX_ADDRESS: i64 = 254;

/// Extra random edges per node, on top of the spanning tree.
pub const DEFAULT_EXTRA_EDGE_RATIO: f64 = 0.5;

/// Upper bound for `generator.extra_edge_ratio`.
pub const MAX_EXTRA_EDGE_RATIO: f64 = 16.0;
