use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the two players for the duration of a round.
/// The same person may open with `X` in one round and `O` in the next;
/// the session's rotation decides that, not this type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark, used for turn alternation and the
    /// starting-player rotation.
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}
