use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One turn of a chat conversation as exchanged with the frontend.
///
/// `content` and any extra fields (`name`, `tool_call_id`, ...) are kept as raw JSON
/// so relays that forward messages send them on exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: Value::String(content.into()),
            extra: Map::new(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == "user"
    }

    /// Plain-text view of `content`. Multi-part content joins its `text` parts;
    /// any other JSON value is rendered as-is.
    pub fn text(&self) -> Cow<'_, str> {
        match &self.content {
            Value::String(s) => Cow::Borrowed(s),
            Value::Array(parts) => Cow::Owned(
                parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(Value::as_str))
                    .collect(),
            ),
            Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// Request body shared by both chat relay routes.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Reply shape returned by the Gemini relay.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub role: &'static str,
    pub content: String,
}

impl ChatReply {
    pub fn assistant(content: String) -> Self {
        Self {
            role: "assistant",
            content,
        }
    }
}
