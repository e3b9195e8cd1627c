use crate::ui::Route;
use crate::views::nav::NavBar;
use dioxus::prelude::*;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        NavBar {}
        main { class: "page page-center",
            h1 { class: "page-title", "Page not found" }
            p { class: "text-muted", "There is nothing at {path}." }
            Link { class: "btn", to: Route::UploadPage {}, "Back to upload" }
        }
    }
}
