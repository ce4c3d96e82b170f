use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::record::InteractionRecord;

/// Handle to a session as listed by the registry. Read-only here; the
/// registry owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRef {
    pub id: String,
    pub summary: Option<String>,
    pub last_modified: DateTime<Utc>,
    pub path: PathBuf,
}

impl SessionRef {
    /// Display title for lane headers: summary when present, id otherwise.
    pub fn title(&self) -> &str {
        self.summary.as_deref().unwrap_or(&self.id)
    }
}

/// Aggregated statistics for one session, derived by a single linear
/// reduction over its records.
///
/// Invariant: `total_tokens == input_tokens + output_tokens`, accumulated
/// only from usage-bearing records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_tokens: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub error_count: u32,
    pub duration_ms: u64,
    pub tool_count: u32,
}

/// Everything the board holds for one loaded session.
///
/// Replaced wholesale on each load; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSessionData {
    pub session: SessionRef,
    pub records: Vec<InteractionRecord>,
    pub stats: SessionStats,
}
