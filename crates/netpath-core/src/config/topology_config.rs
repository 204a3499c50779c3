use serde::{Deserialize, Serialize};

/// How `add_edge(x, x)` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfLoopPolicy {
    /// Self-loops are dropped without error.
    #[default]
    Ignore,
    /// Self-loops are stored once in the node's own adjacency list.
    Allow,
}

impl SelfLoopPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Allow => "allow",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "allow" => Some(Self::Allow),
            _ => None,
        }
    }
}

/// Topology store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    pub self_loops: SelfLoopPolicy,
}
