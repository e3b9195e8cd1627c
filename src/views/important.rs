use crate::ui::use_document_store;
use crate::views::nav::NavBar;
use crate::views::shared::{DocumentItem, EmptyState};
use dioxus::prelude::*;

#[component]
pub fn ImportantPage() -> Element {
    let store = use_document_store();
    let documents: Vec<_> = store.read().important_documents().cloned().collect();

    rsx! {
        NavBar {}
        main { class: "page",
            h1 { class: "page-title", "Important Documents" }
            if documents.is_empty() {
                EmptyState {
                    message: "No important documents found. Mark documents as important to see them here.",
                }
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
