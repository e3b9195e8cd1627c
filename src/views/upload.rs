use crate::ingest;
use crate::ui::{Route, use_document_store};
use crate::views::nav::NavBar;
use dioxus::prelude::*;

/// A validated, fully read file waiting for the user to confirm.
#[derive(Clone, PartialEq)]
struct PendingFile {
    name: String,
    size_bytes: u64,
    content: String,
}

#[component]
pub fn UploadPage() -> Element {
    rsx! {
        NavBar {}
        main { class: "page page-center",
            h1 { class: "page-title", "Upload Your Document" }
            p { class: "page-subtitle",
                "Drag and drop your document or browse to upload. Then chat with your document!"
            }
            FileUpload {}
        }
    }
}

#[component]
fn FileUpload() -> Element {
    let mut store = use_document_store();
    let mut pending = use_signal(|| Option::<PendingFile>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let nav = navigator();

    let process_file = move |_| {
        if let Some(file) = pending() {
            let document = store.write().add_document(file.name, Some(file.content));
            nav.push(Route::ChatPage {
                document_id: document.id,
            });
        }
    };

    let current = pending();
    let processing_disabled = current.is_none();

    rsx! {
        div { class: "upload-zone",
            if let Some(file) = current {
                div { class: "upload-file",
                    span { class: "upload-file-name", "{file.name}" }
                    span { class: "upload-file-size", "{format_size_kb(file.size_bytes)}" }
                }
            } else {
                div { class: "upload-prompt",
                    p { "Choose a file to get started" }
                    p { class: "text-muted", "Supports .txt, .md, and .pdf files" }
                }
            }
            input {
                r#type: "file",
                accept: ".txt,.md,.pdf,text/plain,application/pdf",
                onchange: move |evt| async move {
                    let Some(engine) = evt.files() else { return };
                    let Some(name) = engine.files().first().cloned() else { return };

                    if let Err(err) = ingest::check_supported(&name, None) {
                        tracing::warn!(%err, "rejected upload");
                        notice.set(Some("Invalid file type: please upload a text or PDF file.".to_string()));
                        return;
                    }

                    match engine.read_file_to_string(&name).await {
                        Some(content) => {
                            let size_bytes = content.len() as u64;
                            notice.set(None);
                            pending.set(Some(PendingFile { name, size_bytes, content }));
                        }
                        None => {
                            tracing::warn!(file = %name, "failed to read upload");
                            notice.set(Some("There was a problem processing your file.".to_string()));
                        }
                    }
                },
            }
        }
        if let Some(message) = notice() {
            div { class: "notice notice-error", "{message}" }
        }
        div { class: "upload-actions",
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: processing_disabled,
                onclick: process_file,
                "Process Document"
            }
        }
    }
}

fn format_size_kb(size_bytes: u64) -> String {
    format!("{:.1} KB", size_bytes as f64 / 1024.0)
}
