use crate::responder::{CannedResponder, Responder};
use crate::store::DocumentStore;
use crate::views::{ChatPage, HistoryPage, ImportantPage, NotFoundPage, UploadPage};
use dioxus::prelude::*;
use std::sync::Arc;

const DOCCHAT_CSS: Asset = asset!("/assets/docchat.css");

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    UploadPage {},
    #[route("/chat/:document_id")]
    ChatPage { document_id: String },
    #[route("/history")]
    HistoryPage {},
    #[route("/important")]
    ImportantPage {},
    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

/// Shared handle to the simulated assistant backend.
#[derive(Clone)]
pub struct ResponderHandle(pub Arc<dyn Responder>);

#[component]
pub fn App() -> Element {
    // Store and responder live for the whole page session; every view reaches
    // them through context instead of ambient globals.
    use_context_provider(|| Signal::new(DocumentStore::default()));
    use_context_provider(|| ResponderHandle(Arc::new(CannedResponder::from_env())));

    rsx! {
        document::Link { rel: "stylesheet", href: DOCCHAT_CSS }
        Router::<Route> {}
    }
}

pub fn use_document_store() -> Signal<DocumentStore> {
    use_context::<Signal<DocumentStore>>()
}

pub fn use_responder() -> Arc<dyn Responder> {
    use_context::<ResponderHandle>().0
}
