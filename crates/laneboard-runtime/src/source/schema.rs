use serde::Deserialize;
use serde_json::Value;

/// One raw JSONL line. Every field is optional: a malformed or missing
/// field must default to no contribution, never fail the record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRecord {
    #[serde(default)]
    pub uuid: Option<String>,
    /// Record type tag; role fallback when `role` is absent.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub usage: Option<RawUsage>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    /// System-level stop reason (e.g. "stop_reason_error").
    #[serde(default)]
    pub stop_reason_system: Option<String>,
    #[serde(default)]
    pub tool_use: Option<RawToolUse>,
    /// Tool outcome; shape varies per tool (object or bare string), so it
    /// stays a Value until the mapper extracts the failure signals.
    #[serde(default)]
    pub tool_use_result: Option<Value>,
    /// Message content: a bare string or an array of typed items.
    #[serde(default)]
    pub content: Option<Value>,
}

/// Usage keys are snake_case in the logs, unlike the record envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct RawUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawToolUse {
    #[serde(default)]
    pub name: Option<String>,
}
