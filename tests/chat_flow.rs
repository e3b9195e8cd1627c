//! Integration tests for the full upload-and-chat flow
//!
//! Drives the document store and the canned responder together, the same way
//! the chat view does, without any UI in the loop.

use docchat::ingest;
use docchat::responder::{CannedResponder, Responder};
use docchat::store::{DocumentStore, SequentialIds};
use docchat::types::{MessageDraft, Role};
use std::time::Duration;

mod upload_tests {
    use super::*;

    #[test]
    fn upload_creates_a_single_fresh_document() {
        let mut store = DocumentStore::new(SequentialIds::default());
        let doc = store.add_document("notes.txt", Some("hello".to_string()));

        assert_eq!(store.documents().len(), 1);
        let stored = store.get_document(&doc.id).expect("document missing");
        assert_eq!(stored.name, "notes.txt");
        assert_eq!(stored.content.as_deref(), Some("hello"));
        assert!(!stored.is_important);
        assert_eq!(stored.chats.len(), 1);
        assert!(stored.active_messages().is_empty());
    }

    #[test]
    fn unsupported_upload_is_rejected_before_the_store_is_touched() {
        let mut store = DocumentStore::new(SequentialIds::default());
        store.add_document("a.txt", None);
        let before = store.documents().len();

        assert!(ingest::check_supported("photo.png", None).is_err());
        // Rejection happens at validation; nothing reaches the store.
        assert_eq!(store.documents().len(), before);
    }
}

mod chat_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn user_message_lands_immediately_and_reply_after_the_delay() {
        let mut store = DocumentStore::new(SequentialIds::default());
        let responder = CannedResponder::new(Duration::from_secs(1));
        let doc = store.add_document("notes.txt", Some("hello".to_string()));

        store
            .add_message(&doc.id, MessageDraft::user("what is this about?"))
            .expect("user message rejected");
        assert_eq!(store.get_document(&doc.id).unwrap().active_messages().len(), 1);

        let reply = responder
            .reply(&doc.name, "what is this about?")
            .await
            .expect("responder failed");
        store
            .add_message(&doc.id, MessageDraft::assistant(reply))
            .expect("assistant message rejected");

        let messages = store.get_document(&doc.id).unwrap().active_messages().to_vec();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(messages[1].content.contains("notes.txt"));
        assert!(messages[1].content.contains("what is this about?"));
    }

    #[test]
    fn important_toggle_round_trips_through_the_listing() {
        let mut store = DocumentStore::new(SequentialIds::default());
        let doc = store.add_document("notes.txt", None);
        assert_eq!(store.important_documents().count(), 0);

        store.toggle_important(&doc.id).expect("toggle failed");
        let important: Vec<_> = store.important_documents().collect();
        assert_eq!(important.len(), 1);
        assert_eq!(important[0].id, doc.id);

        store.toggle_important(&doc.id).expect("toggle failed");
        assert_eq!(store.important_documents().count(), 0);
    }
}
