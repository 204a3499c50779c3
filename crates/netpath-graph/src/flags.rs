//! Per-search node flags, kept apart from node records.

use std::collections::HashSet;

use netpath_core::models::NodeId;

/// Visited and in-path state for one search.
///
/// Within a direction phase the visited set doubles as the BFS visited-set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFlags {
    visited: HashSet<NodeId>,
    in_path: HashSet<NodeId>,
}

impl SearchFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` visited. Returns `false` if it already was.
    pub fn mark_visited(&mut self, id: NodeId) -> bool {
        self.visited.insert(id)
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    pub fn mark_path(&mut self, path: &[NodeId]) {
        self.in_path.extend(path.iter().copied());
    }

    pub fn is_in_path(&self, id: NodeId) -> bool {
        self.in_path.contains(&id)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Drop every flag held for `id`.
    pub fn forget(&mut self, id: NodeId) {
        self.visited.remove(&id);
        self.in_path.remove(&id);
    }

    pub fn clear(&mut self) {
        self.visited.clear();
        self.in_path.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty() && self.in_path.is_empty()
    }
}
