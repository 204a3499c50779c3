//! Span definitions for path searches.

/// Create a span covering one whole `find_path` call.
#[macro_export]
macro_rules! search_span {
    ($source:expr, $dest:expr) => {
        ::tracing::info_span!("netpath.search", source = $source, dest = $dest)
    };
}

/// Create a span covering one directional BFS phase.
#[macro_export]
macro_rules! phase_span {
    ($direction:expr) => {
        ::tracing::debug_span!("netpath.phase", direction = %$direction)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEARCH: &str = "netpath.search";
    pub const PHASE: &str = "netpath.phase";
}
