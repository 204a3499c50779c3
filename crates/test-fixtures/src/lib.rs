//! Test fixture loader for netpath golden networks.
//!
//! Provides typed deserialization of the fixture JSON files under `networks/`
//! and helper functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// Relative paths (as accepted by [`load_fixture`]) of every golden network.
pub fn golden_networks() -> Vec<String> {
    list_fixtures("networks")
        .into_iter()
        .filter_map(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| format!("networks/{n}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Typed fixture schema
// ---------------------------------------------------------------------------

/// A node declared in a golden network.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureNode {
    pub id: i64,
    pub address: i64,
}

/// A path query with its expected outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureQuery {
    pub source: i64,
    pub dest: i64,
    /// Expected node ids of the route, or `None` when no path exists.
    pub expected_path: Option<Vec<i64>>,
    /// Expected phase: "same_point", "higher" or "lower". Absent for no-path queries.
    #[serde(default)]
    pub resolved_by: Option<String>,
    /// Expected total snapshot count across all phases.
    pub expected_snapshots: usize,
}

/// A golden network: nodes, edges in insertion order, and queries.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenNetwork {
    pub name: String,
    pub nodes: Vec<FixtureNode>,
    pub edges: Vec<(i64, i64)>,
    pub queries: Vec<FixtureQuery>,
}
