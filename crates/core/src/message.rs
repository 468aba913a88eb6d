//! Message domain types.
//!
//! A conversation history is a caller-supplied ordered slice of [`Message`]s;
//! insertion order is chronological and there is no uniqueness constraint.
//! Messages are immutable once created — the pipeline never rewrites history.

use serde::{Deserialize, Serialize};

/// The role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The AI assistant
    Assistant,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_message() {
        let msg = Message::user("逢甲夜市有什麼好吃的？");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "逢甲夜市有什麼好吃的？");
    }

    #[test]
    fn role_serializes_lowercase() {
        let msg = Message::assistant("歡迎來台中！");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"assistant\""));
    }

    #[test]
    fn message_serialization_roundtrip() {
        let msg = Message::user("Where can I rent a bike?");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
