use std::fmt;

use netpath_core::models::Address;
use serde::{Deserialize, Serialize};

/// Which side of the destination's address a phase is allowed to explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Admit neighbors whose address is strictly greater than the destination's.
    Higher,
    /// Admit neighbors whose address is strictly less than the destination's.
    Lower,
}

impl Direction {
    /// Phases in the order they are attempted.
    pub const ATTEMPT_ORDER: [Direction; 2] = [Direction::Higher, Direction::Lower];

    /// Whether a neighbor with address `candidate` may be enqueued when heading for `dest`.
    pub fn admits(self, candidate: Address, dest: Address) -> bool {
        match self {
            Self::Higher => candidate > dest,
            Self::Lower => candidate < dest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Higher => "higher",
            Self::Lower => "lower",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
