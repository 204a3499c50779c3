//! One directional BFS pass.

use std::collections::VecDeque;

use netpath_core::models::{Node, NodeId};

use super::recorder::TraceRecorder;
use super::Direction;
use crate::flags::SearchFlags;
use crate::network::Network;

/// Run a single phase from `source` toward `dest`.
///
/// A snapshot is recorded on every queue pop, and once more when the
/// destination is reached. A neighbor that *is* the destination ends the
/// phase immediately, whatever its address.
pub(crate) fn run(
    network: &Network,
    flags: &mut SearchFlags,
    recorder: &mut TraceRecorder,
    source: Node,
    dest: Node,
    direction: Direction,
) -> Option<Vec<NodeId>> {
    let mut queue: VecDeque<(NodeId, Vec<NodeId>)> = VecDeque::new();
    queue.push_back((source.id, vec![source.id]));

    while let Some((current, path)) = queue.pop_front() {
        recorder.record(network, flags);

        if current == dest.id {
            flags.mark_path(&path);
            recorder.record(network, flags);
            return Some(path);
        }

        if !flags.mark_visited(current) {
            continue;
        }

        for &neighbor in network.topology().neighbors(current) {
            if neighbor == dest.id {
                let mut found = path.clone();
                found.push(dest.id);
                flags.mark_path(&found);
                recorder.record(network, flags);
                return Some(found);
            }

            let Ok(candidate) = network.node(neighbor) else {
                continue;
            };
            if direction.admits(candidate.address, dest.address) && !flags.is_visited(neighbor) {
                let mut next = path.clone();
                next.push(neighbor);
                queue.push_back((neighbor, next));
            }
        }
    }

    None
}
