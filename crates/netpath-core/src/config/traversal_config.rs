use serde::{Deserialize, Serialize};

/// Traversal engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Capture one snapshot per queue pop. Disable for headless callers that only need the route.
    pub record_trace: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self { record_trace: true }
    }
}
