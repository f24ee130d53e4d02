//! Conversation record schema for supervised fine-tuning

use serde::{Deserialize, Serialize};

/// Speaker role of a dialogue turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One utterance in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// One training example: an ordered sequence of dialogue turns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub messages: Vec<Turn>,
}

impl ConversationRecord {
    pub fn new(messages: Vec<Turn>) -> Self {
        Self { messages }
    }

    /// True if the record opens with a system turn
    pub fn has_system_turn(&self) -> bool {
        matches!(self.messages.first(), Some(turn) if turn.role == Role::System)
    }

    /// The content of the last user turn, if any. Used to extract prompts
    /// from held-out records for generation.
    pub fn last_user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|t| t.role == Role::User)
            .map(|t| t.content.as_str())
    }
}
