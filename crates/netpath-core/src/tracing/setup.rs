//! Tracing subscriber initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants;

static INIT: Once = Once::new();

/// Initialize the netpath tracing/logging system.
///
/// Reads the `NETPATH_LOG` environment variable for per-module log levels.
/// Format: `NETPATH_LOG=netpath_graph=debug,netpath_core=warn`
///
/// Falls back to `config.filter` if `NETPATH_LOG` is not set or is invalid.
///
/// Calling this more than once is safe; only the first call installs a subscriber.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.filter))
            .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        // Another subscriber (e.g. a host application's) already owns the global slot.
        let _ = installed;
    });
}
