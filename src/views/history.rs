use crate::ui::use_document_store;
use crate::views::nav::NavBar;
use crate::views::shared::{DocumentItem, EmptyState};
use dioxus::prelude::*;

#[component]
pub fn HistoryPage() -> Element {
    let store = use_document_store();
    let documents = store.read().documents().to_vec();

    rsx! {
        NavBar {}
        main { class: "page",
            h1 { class: "page-title", "Document History" }
            if documents.is_empty() {
                EmptyState { message: "No documents found. Upload a document to begin." }
            } else {
                div { class: "doc-list",
                    for document in documents {
                        DocumentItem { key: "{document.id}", document }
                    }
                }
            }
        }
    }
}
