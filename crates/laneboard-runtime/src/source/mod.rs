//! The message-fetch boundary.
//!
//! Raw session logs are heterogeneous JSONL; the schema here is permissive
//! (every field optional, defaults everywhere) and the mapper normalizes
//! each line into the typed record model exactly once. Everything past this
//! boundary handles variants exhaustively instead of re-probing shapes.

mod mapper;
mod schema;

pub(crate) use mapper::map_record;
pub(crate) use schema::RawRecord;

use crate::Result;
use laneboard_types::{InteractionRecord, SessionRef};
use std::path::Path;

/// Async boundary to the message transport. Each call fails independently;
/// the board isolates failures per session.
pub trait MessageSource {
    fn fetch_messages(
        &self,
        session: &SessionRef,
    ) -> impl Future<Output = Result<Vec<InteractionRecord>>>;
}

/// Default source: reads the session's JSONL file from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlSource;

impl MessageSource for JsonlSource {
    async fn fetch_messages(&self, session: &SessionRef) -> Result<Vec<InteractionRecord>> {
        read_jsonl(&session.path).await
    }
}

async fn read_jsonl(path: &Path) -> Result<Vec<InteractionRecord>> {
    let text = tokio::fs::read_to_string(path).await?;
    parse_records(&text)
}

/// Parse JSONL text into normalized records. An unparsable line fails the
/// whole session (the batch isolates that failure); fields missing from a
/// parsable line default to no contribution.
pub fn parse_records(text: &str) -> Result<Vec<InteractionRecord>> {
    let mut records = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let raw: RawRecord = serde_json::from_str(line)?;
        records.push(mapper::map_record(raw));
    }
    Ok(records)
}
