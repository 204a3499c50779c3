use netpath_core::models::Trace;

use crate::flags::SearchFlags;
use crate::network::Network;

/// Collects snapshots for one search in the order they are taken.
#[derive(Debug)]
pub(crate) struct TraceRecorder {
    enabled: bool,
    trace: Trace,
}

impl TraceRecorder {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            trace: Trace::new(),
        }
    }

    pub(crate) fn record(&mut self, network: &Network, flags: &SearchFlags) {
        if self.enabled {
            self.trace.push(network.snapshot_with(flags));
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.trace.len()
    }

    pub(crate) fn finish(self) -> Trace {
        self.trace
    }
}
