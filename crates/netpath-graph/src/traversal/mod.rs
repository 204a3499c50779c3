//! Traversal engine: two-phase directional BFS with a replayable snapshot trace.

pub mod direction;
pub mod outcome;
mod phase;
mod recorder;

pub use direction::Direction;
pub use outcome::{PathFound, Resolution, SearchFailure};

use netpath_core::config::TraversalConfig;
use netpath_core::errors::SearchError;
use netpath_core::models::{Node, NodeId, Trace};
use netpath_core::{phase_span, search_span};
use tracing::debug;

use crate::flags::SearchFlags;
use crate::network::Network;
use recorder::TraceRecorder;

/// The traversal engine wraps the search policy and its configuration.
#[derive(Debug, Clone, Default)]
pub struct TraversalEngine {
    pub config: TraversalConfig,
}

impl TraversalEngine {
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    /// Find a path from `source` to `dest`, preferring the "higher" phase.
    ///
    /// On return the network holds the flags of this search, so a following
    /// [`Network::snapshot`] shows what was visited and which nodes form the route.
    /// Unknown ids leave the network untouched and yield an empty trace.
    pub fn find_path(
        &self,
        network: &mut Network,
        source: NodeId,
        dest: NodeId,
    ) -> Result<PathFound, SearchFailure> {
        let _span = search_span!(source, dest).entered();

        let (source_node, dest_node) = match (network.node(source), network.node(dest)) {
            (Ok(s), Ok(d)) => (s, d),
            (Err(_), _) => return Err(unknown(source)),
            (_, Err(_)) => return Err(unknown(dest)),
        };

        let mut flags = SearchFlags::new();
        let result = self.search(network, &mut flags, source_node, dest_node);
        network.set_flags(flags);
        result
    }

    fn search(
        &self,
        network: &Network,
        flags: &mut SearchFlags,
        source: Node,
        dest: Node,
    ) -> Result<PathFound, SearchFailure> {
        let mut recorder = TraceRecorder::new(self.config.record_trace);

        if source.id == dest.id {
            flags.mark_path(&[source.id]);
            recorder.record(network, flags);
            return Ok(PathFound {
                path: network.route(&[source.id]),
                trace: recorder.finish(),
                resolution: Resolution::SamePoint,
            });
        }

        for direction in Direction::ATTEMPT_ORDER {
            let _phase = phase_span!(direction).entered();
            flags.clear();
            let before = recorder.len();

            if let Some(ids) = phase::run(network, flags, &mut recorder, source, dest, direction) {
                debug!(
                    direction = %direction,
                    hops = ids.len(),
                    snapshots = recorder.len() - before,
                    "destination reached"
                );
                return Ok(PathFound {
                    path: network.route(&ids),
                    trace: recorder.finish(),
                    resolution: Resolution::Phase(direction),
                });
            }

            debug!(
                direction = %direction,
                visited = flags.visited_count(),
                snapshots = recorder.len() - before,
                "phase exhausted"
            );
        }

        Err(SearchFailure {
            reason: SearchError::NoPath {
                origin: source.id,
                destination: dest.id,
            },
            trace: recorder.finish(),
        })
    }
}

fn unknown(id: NodeId) -> SearchFailure {
    SearchFailure {
        reason: SearchError::UnknownNode { id },
        trace: Trace::new(),
    }
}
