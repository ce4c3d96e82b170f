use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Speaker of an interaction record.
///
/// Resolved once at the fetch boundary from the record's `role` field,
/// falling back to its type tag when no role is present. Tags outside the
/// three conversational roles collapse to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
    Other,
}

impl Role {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "system" => Role::System,
            _ => Role::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Other => "other",
        }
    }
}

/// Token usage attached to a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Top-level tool invocation descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolUse {
    pub name: String,
}

/// Top-level tool execution outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutcome {
    pub is_error: bool,
    pub stderr: Option<String>,
}

impl ToolOutcome {
    /// True when the outcome signals a failure: explicit error flag or
    /// non-empty stderr.
    pub fn failed(&self) -> bool {
        self.is_error || self.stderr.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Normalized failure signals for a tool-result content block.
///
/// `is_error` carries the explicit error flag of the plain `tool_result`
/// content type. `nested_failure` is set when an extended tool-result type
/// (any type name containing `tool_result`) wraps a payload with non-empty
/// stderr or an error-tagged type. Both may hold for one block and each
/// counts separately in the stats reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResultBlock {
    pub is_error: bool,
    pub nested_failure: bool,
}

/// Nested content item of an interaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    ToolUse { name: String },
    ToolResult(ToolResultBlock),
}

/// One message/turn of a session, immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub uuid: Uuid,
    pub role: Role,
    /// System-level stop reason, when the record carries one.
    pub stop_reason: Option<String>,
    pub usage: Option<TokenUsage>,
    pub duration_ms: Option<u64>,
    pub tool_use: Option<ToolUse>,
    pub tool_result: Option<ToolOutcome>,
    pub content: Vec<ContentBlock>,
}

impl InteractionRecord {
    /// Bare record with the given role, everything else absent.
    pub fn new(uuid: Uuid, role: Role) -> Self {
        Self {
            uuid,
            role,
            stop_reason: None,
            usage: None,
            duration_ms: None,
            tool_use: None,
            tool_result: None,
            content: Vec::new(),
        }
    }

    /// True when the record's stop reason mentions an error.
    pub fn stop_reason_is_error(&self) -> bool {
        self.stop_reason
            .as_deref()
            .is_some_and(|reason| reason.to_lowercase().contains("error"))
    }
}
