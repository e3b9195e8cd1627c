use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn in a chat transcript. Messages are append-only: once stored they
/// are never edited or removed, so insertion order is chronological order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// What callers hand to the store when appending; the store assigns the id
/// and timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageDraft {
    pub role: Role,
    pub content: String,
}

impl MessageDraft {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// An uploaded file's metadata, its raw text content, and its chat sessions.
///
/// `chats` maps session ids to transcripts; `active_session_id` always has a
/// corresponding (possibly empty) entry, established at creation. Only one
/// session is ever active per document in current usage, but the mapping
/// leaves room for more. After creation, `is_important` and the transcripts
/// are the only mutable state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub upload_date: OffsetDateTime,
    pub content: Option<String>,
    pub is_important: bool,
    pub chats: HashMap<String, Vec<Message>>,
    pub active_session_id: String,
}

impl Document {
    /// Transcript of the active session.
    pub fn active_messages(&self) -> &[Message] {
        self.chats
            .get(&self.active_session_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
