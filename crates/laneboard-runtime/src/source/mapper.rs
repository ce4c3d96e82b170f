use serde_json::Value;
use uuid::Uuid;

use laneboard_types::{
    ContentBlock, InteractionRecord, Role, TokenUsage, ToolOutcome, ToolResultBlock, ToolUse,
};

use super::schema::RawRecord;

/// Normalize one raw record into the typed model.
///
/// The role resolves from `role` first, then the record's type tag. A
/// missing or unparsable uuid gets a fresh v4 so row identity stays unique.
pub(crate) fn map_record(raw: RawRecord) -> InteractionRecord {
    let role = raw
        .role
        .as_deref()
        .or(raw.kind.as_deref())
        .map(Role::from_tag)
        .unwrap_or(Role::Other);

    let uuid = raw
        .uuid
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let usage = raw.usage.map(|u| TokenUsage {
        input_tokens: u.input_tokens,
        output_tokens: u.output_tokens,
    });

    // Presence alone counts toward tool stats; a nameless descriptor keeps
    // an empty name rather than disappearing.
    let tool_use = raw.tool_use.map(|t| ToolUse {
        name: t.name.unwrap_or_default(),
    });

    let tool_result = raw.tool_use_result.as_ref().map(map_tool_outcome);

    let content = raw.content.map(map_content).unwrap_or_default();

    InteractionRecord {
        uuid,
        role,
        stop_reason: raw.stop_reason_system,
        usage,
        duration_ms: raw.duration_ms,
        tool_use,
        tool_result,
        content,
    }
}

fn map_tool_outcome(value: &Value) -> ToolOutcome {
    ToolOutcome {
        is_error: value
            .get("is_error")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        stderr: value
            .get("stderr")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

fn map_content(value: Value) -> Vec<ContentBlock> {
    match value {
        Value::String(text) => vec![ContentBlock::Text { text }],
        Value::Array(items) => items.iter().filter_map(map_content_item).collect(),
        _ => Vec::new(),
    }
}

fn map_content_item(item: &Value) -> Option<ContentBlock> {
    let kind = item.get("type").and_then(Value::as_str)?;

    if kind == "text" {
        let text = item
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Some(ContentBlock::Text { text });
    }

    if kind == "tool_use" {
        let name = item
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Some(ContentBlock::ToolUse { name });
    }

    // Extended tool-result types (bash_tool_result, code execution, ...)
    // share the nested-failure check; the explicit error flag belongs to
    // the plain tool_result type only.
    if kind.contains("tool_result") {
        let is_error = kind == "tool_result"
            && item
                .get("is_error")
                .and_then(Value::as_bool)
                .unwrap_or(false);
        let nested_failure = item.get("content").map(nested_failure).unwrap_or(false);
        return Some(ContentBlock::ToolResult(ToolResultBlock {
            is_error,
            nested_failure,
        }));
    }

    None
}

fn nested_failure(nested: &Value) -> bool {
    let stderr = nested
        .get("stderr")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty());
    let error_tagged = nested
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| t.contains("error"));
    stderr || error_tagged
}
