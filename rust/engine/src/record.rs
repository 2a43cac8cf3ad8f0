use serde::{Deserialize, Serialize};

use crate::player::Mark;
use crate::round::RoundResult;

use chrono::{SecondsFormat, Utc};

/// One placed mark, in play order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based turn number within the round
    pub turn: usize,
    /// The mark that moved
    pub mark: Mark,
    /// Zero-based cell index the mark was placed on
    pub index: usize,
}

/// Transcript of a completed (or abandoned) round. Emitted on the debug
/// log by the CLI; never read back or persisted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Chronological list of all moves played
    pub moves: Vec<MoveRecord>,
    /// Outcome, `None` when the round was abandoned mid-way
    pub result: Option<RoundResult>,
    /// Timestamp when the round finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Build a record stamped with the current wall-clock time.
    pub fn stamped(moves: Vec<MoveRecord>, result: Option<RoundResult>) -> Self {
        Self {
            moves,
            result,
            ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
