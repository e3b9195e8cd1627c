use crate::types::Document;
use crate::ui::Route;
use dioxus::prelude::*;
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

const UPLOAD_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:zero], [year]");

/// One row in the history/important listings; clicking opens the document's
/// chat page.
#[component]
pub fn DocumentItem(document: Document) -> Element {
    let nav = navigator();
    let document_id = document.id.clone();
    let uploaded = relative_upload_time(document.upload_date, OffsetDateTime::now_utc());

    rsx! {
        div {
            class: "doc-row",
            role: "button",
            tabindex: "0",
            onclick: move |_| {
                nav.push(Route::ChatPage { document_id: document_id.clone() });
            },
            div { class: "doc-row-main",
                span { class: "doc-row-name", "{document.name}" }
                if document.is_important {
                    span { class: "doc-row-star", title: "Important", "\u{2605}" }
                }
            }
            span { class: "doc-row-date", "{uploaded}" }
        }
    }
}

#[component]
pub fn EmptyState(message: &'static str) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "text-muted", "{message}" }
        }
    }
}

/// "3 minutes ago" style rendering of an upload timestamp; falls back to an
/// absolute date once the document is more than a month old.
pub fn relative_upload_time(upload: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - upload;
    let minutes = elapsed.whole_minutes();
    let hours = elapsed.whole_hours();
    let days = elapsed.whole_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} {} ago", minutes, pluralize(minutes, "minute"))
    } else if hours < 24 {
        format!("{} {} ago", hours, pluralize(hours, "hour"))
    } else if days < 31 {
        format!("{} {} ago", days, pluralize(days, "day"))
    } else {
        upload
            .format(UPLOAD_DATE_FORMAT)
            .unwrap_or_else(|_| "some time ago".to_string())
    }
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2026-06-15 12:00:00 UTC);

    #[test]
    fn fresh_uploads_read_just_now() {
        assert_eq!(relative_upload_time(NOW, NOW), "just now");
        assert_eq!(
            relative_upload_time(NOW - Duration::seconds(30), NOW),
            "just now"
        );
    }

    #[test]
    fn recent_uploads_use_relative_units() {
        assert_eq!(
            relative_upload_time(NOW - Duration::minutes(1), NOW),
            "1 minute ago"
        );
        assert_eq!(
            relative_upload_time(NOW - Duration::minutes(45), NOW),
            "45 minutes ago"
        );
        assert_eq!(
            relative_upload_time(NOW - Duration::hours(3), NOW),
            "3 hours ago"
        );
        assert_eq!(
            relative_upload_time(NOW - Duration::days(12), NOW),
            "12 days ago"
        );
    }

    #[test]
    fn old_uploads_fall_back_to_absolute_dates() {
        assert_eq!(
            relative_upload_time(NOW - Duration::days(90), NOW),
            "Mar 17, 2026"
        );
    }
}
