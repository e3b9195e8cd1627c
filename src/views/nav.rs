use crate::ui::Route;
use dioxus::prelude::*;

#[component]
pub fn NavBar() -> Element {
    rsx! {
        header { class: "header",
            div { class: "header-content",
                Link { class: "brand", to: Route::UploadPage {}, "DocChat" }
                nav { class: "nav-links",
                    Link { class: "nav-link", to: Route::HistoryPage {}, "History" }
                    Link { class: "nav-link", to: Route::ImportantPage {}, "Important" }
                }
            }
        }
    }
}
