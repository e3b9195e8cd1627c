//! In-memory document store.
//!
//! Single source of truth for the document list and the per-document chat
//! transcripts. The store is constructed once at app start and handed to the
//! view tree through context; nothing here survives a reload. All mutations
//! are synchronous and immediately visible to subsequent reads, since they are
//! serialized by the UI event loop.

use crate::types::{Document, Message, MessageDraft};
use std::collections::HashMap;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no document with id {0:?}")]
    DocumentNotFound(String),
}

/// Source of document, session, and message identifiers.
///
/// Injectable so tests can use a deterministic counter instead of random
/// UUIDs.
pub trait IdSource: Send + Sync + 'static {
    fn next_id(&mut self) -> String;
}

/// Production source: random v4 UUIDs, so identifier collisions are not a
/// concern.
#[derive(Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter source for deterministic tests.
#[derive(Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("id-{}", self.next)
    }
}

pub struct DocumentStore {
    documents: Vec<Document>,
    ids: Box<dyn IdSource>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(UuidIds)
    }
}

impl DocumentStore {
    pub fn new(ids: impl IdSource) -> Self {
        Self {
            documents: Vec::new(),
            ids: Box::new(ids),
        }
    }

    /// Creates a document with a fresh id and one empty chat session, appends
    /// it to the list, and returns a copy. Always succeeds.
    pub fn add_document(&mut self, name: impl Into<String>, content: Option<String>) -> Document {
        let session_id = self.ids.next_id();
        let mut chats = HashMap::new();
        chats.insert(session_id.clone(), Vec::new());

        let document = Document {
            id: self.ids.next_id(),
            name: name.into(),
            upload_date: OffsetDateTime::now_utc(),
            content,
            is_important: false,
            chats,
            active_session_id: session_id,
        };

        self.documents.push(document.clone());
        tracing::info!(id = %document.id, name = %document.name, "document added");
        document
    }

    /// Appends a message to the active session of the given document,
    /// assigning a fresh id and the current timestamp. Returns the stored
    /// message. Misses fail with [`StoreError::DocumentNotFound`] and leave
    /// the store untouched.
    pub fn add_message(
        &mut self,
        document_id: &str,
        draft: MessageDraft,
    ) -> Result<Message, StoreError> {
        let index = self
            .documents
            .iter()
            .position(|doc| doc.id == document_id)
            .ok_or_else(|| StoreError::DocumentNotFound(document_id.to_string()))?;
        let message = Message {
            id: self.ids.next_id(),
            role: draft.role,
            content: draft.content,
            timestamp: OffsetDateTime::now_utc(),
        };
        let document = &mut self.documents[index];
        let session_id = document.active_session_id.clone();
        document
            .chats
            .entry(session_id)
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    /// Flips the important flag and returns its new value.
    pub fn toggle_important(&mut self, document_id: &str) -> Result<bool, StoreError> {
        let document = self.document_mut(document_id)?;
        document.is_important = !document.is_important;
        Ok(document.is_important)
    }

    pub fn get_document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// All documents, in upload order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Documents flagged important, in upload order.
    pub fn important_documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|doc| doc.is_important)
    }

    fn document_mut(&mut self, id: &str) -> Result<&mut Document, StoreError> {
        self.documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| StoreError::DocumentNotFound(id.to_string()))
    }
}
