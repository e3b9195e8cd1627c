use crate::types::{MessageDraft, Role};
use crate::ui::{Route, use_document_store, use_responder};
use crate::views::nav::NavBar;
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

#[component]
pub fn ChatPage(document_id: String) -> Element {
    let store = use_document_store();
    let found = store.read().get_document(&document_id).is_some();

    rsx! {
        NavBar {}
        if found {
            ChatPanel { document_id }
        } else {
            // Loud not-found state rather than a silent redirect home.
            main { class: "page page-center",
                h1 { class: "page-title", "Document not found" }
                p { class: "text-muted", "This document does not exist in the current session." }
                Link { class: "btn", to: Route::UploadPage {}, "Upload a document" }
            }
        }
    }
}

#[component]
fn ChatPanel(document_id: String) -> Element {
    let mut store = use_document_store();
    let responder = use_responder();
    let mut input = use_signal(String::new);
    // At most one simulated reply in flight per chat view; the flag lives
    // here, not in the store.
    let mut busy = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    let send_id = document_id.clone();
    let send_message = use_callback(move |_: ()| {
        let trimmed = input().trim().to_string();
        if trimmed.is_empty() || busy() {
            return;
        }

        let document_name = match store.read().get_document(&send_id) {
            Some(doc) => doc.name.clone(),
            None => return,
        };

        if let Err(err) = store
            .write()
            .add_message(&send_id, MessageDraft::user(trimmed.clone()))
        {
            tracing::warn!(%err, "dropping user message");
            return;
        }
        input.set(String::new());
        busy.set(true);

        let responder = responder.clone();
        let reply_id = send_id.clone();
        // Scope-owned task: cancelled automatically if the view unmounts
        // before the reply lands.
        spawn(async move {
            match responder.reply(&document_name, &trimmed).await {
                Ok(content) => {
                    if let Err(err) = store
                        .write()
                        .add_message(&reply_id, MessageDraft::assistant(content))
                    {
                        tracing::warn!(%err, "dropping assistant reply");
                    }
                }
                Err(err) => tracing::warn!(%err, "responder failed"),
            }
            busy.set(false);
        });
    });

    let toggle_id = document_id.clone();
    let toggle_important = move |_| match store.write().toggle_important(&toggle_id) {
        Ok(true) => notice.set(Some("Added to Important".to_string())),
        Ok(false) => notice.set(Some("Removed from Important".to_string())),
        Err(err) => tracing::warn!(%err, "toggle failed"),
    };

    let Some(document) = store.read().get_document(&document_id).cloned() else {
        return rsx! {};
    };
    let messages = document.active_messages().to_vec();

    rsx! {
        div { class: "chat-wrap",
            div { class: "chat-header",
                h2 { class: "chat-title", "{document.name}" }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: toggle_important,
                    if document.is_important { "Remove from Important" } else { "Export to Important" }
                }
            }
            if let Some(message) = notice() {
                div { class: "notice", "{message}" }
            }
            div { class: "chat-list",
                if messages.is_empty() && !busy() {
                    div { class: "empty-state",
                        p { class: "text-muted", "Start chatting about your document" }
                    }
                }
                for msg in messages.iter() {
                    div {
                        key: "{msg.id}",
                        class: format_args!(
                            "message-row {}",
                            match msg.role { Role::User => "user", Role::Assistant => "assistant" },
                        ),
                        div { class: "message-stack",
                            div {
                                class: format_args!(
                                    "bubble {}",
                                    match msg.role { Role::User => "user", Role::Assistant => "assistant" },
                                ),
                                "{msg.content}"
                            }
                            if let Some(ts) = format_message_timestamp(msg.timestamp) {
                                span { class: "message-timestamp", "{ts}" }
                            }
                        }
                    }
                }
                if busy() {
                    div { class: "message-row assistant",
                        div { class: "bubble assistant",
                            span { class: "shimmer-text", "Thinking\u{2026}" }
                        }
                    }
                }
            }
            form { class: "composer",
                onsubmit: move |ev| {
                    ev.prevent_default();
                    send_message.call(());
                },
                textarea {
                    rows: "1",
                    placeholder: "Type your message...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            send_message.call(());
                        }
                    },
                    disabled: busy(),
                    autofocus: true,
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy() || input().trim().is_empty(),
                    "Send"
                }
            }
        }
    }
}
