//! Conversation history entries forwarded to the text-generation collaborator

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entries kept from the tail of the history
pub const HISTORY_WINDOW: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }

    /// Accepts `{role, content}` or the web client's `{sender, text}`.
    ///
    /// Only user and assistant turns survive; system turns, unknown roles and
    /// non-string content are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let role = value
            .get("role")
            .or_else(|| value.get("sender"))
            .and_then(Value::as_str)?;
        let content = value
            .get("content")
            .or_else(|| value.get("text"))
            .and_then(Value::as_str)?;

        let role = match role {
            "user" => ChatRole::User,
            "assistant" | "bot" => ChatRole::Assistant,
            _ => return None,
        };

        Some(Self { role, content: content.to_string() })
    }
}

/// Usable turns from raw request history, oldest first
pub fn parse_history(raw: &[Value]) -> Vec<ChatTurn> {
    raw.iter().filter_map(ChatTurn::from_value).collect()
}

/// The last `HISTORY_WINDOW` turns
pub fn recent_turns(turns: &[ChatTurn]) -> &[ChatTurn] {
    &turns[turns.len().saturating_sub(HISTORY_WINDOW)..]
}
