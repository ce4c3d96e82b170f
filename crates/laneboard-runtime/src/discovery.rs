use chrono::{DateTime, Utc};
use std::io::{BufRead, BufReader};
use std::path::Path;
use walkdir::WalkDir;

use laneboard_types::{ContentBlock, Role, SessionRef};

use crate::source::{RawRecord, map_record};
use crate::{Error, Result};

const SUMMARY_SCAN_LINES: usize = 50;
const SUMMARY_MAX_CHARS: usize = 80;

/// Scan a directory for session JSONL files, newest first.
///
/// The id is the file stem, the summary the first user text found in the
/// leading lines. Unreadable or empty files are skipped, not errors.
pub fn scan_sessions(dir: &Path) -> Result<Vec<SessionRef>> {
    if !dir.is_dir() {
        return Err(Error::InvalidOperation(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut sessions = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || path.extension().is_none_or(|e| e != "jsonl") {
            continue;
        }

        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(_) => continue,
        };
        if metadata.len() == 0 {
            continue;
        }

        let id = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };

        let last_modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        sessions.push(SessionRef {
            id,
            summary: extract_summary(path),
            last_modified,
            path: path.to_path_buf(),
        });
    }

    sessions.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
    Ok(sessions)
}

/// First user text in the leading lines, truncated for lane headers.
fn extract_summary(path: &Path) -> Option<String> {
    let file = std::fs::File::open(path).ok()?;
    let reader = BufReader::new(file);

    for line in reader.lines().take(SUMMARY_SCAN_LINES).flatten() {
        let Ok(raw) = serde_json::from_str::<RawRecord>(&line) else {
            continue;
        };
        let record = map_record(raw);
        if record.role != Role::User {
            continue;
        }
        let text = record.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } if !text.trim().is_empty() => Some(text.trim()),
            _ => None,
        });
        if let Some(text) = text {
            let mut summary: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
            if text.chars().count() > SUMMARY_MAX_CHARS {
                summary.push('…');
            }
            return Some(summary);
        }
    }

    None
}
