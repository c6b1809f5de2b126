use dioxus::prelude::*;
use shared_types::view_saved_path;

use crate::research::state::SavedNotesState;

#[component]
pub fn SavedNotesPanel(
    saved: Signal<SavedNotesState>,
    on_delete: Callback<String>,
    on_clear_all: Callback<()>,
) -> Element {
    let listing = saved.read().clone();
    let can_clear_all = listing.can_clear_all();
    let known_empty = listing.known_empty();

    let items = listing.entries.into_iter().map(move |entry| {
        let href = view_saved_path(&entry.id);
        let created = entry.created_at.format("%Y-%m-%d %H:%M").to_string();
        let entry_id = entry.id.clone();
        rsx! {
            li {
                key: "{entry.id}",
                class: "saved-item",
                a {
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{entry.title}"
                }
                span { class: "saved-date", "{created}" }
                button {
                    class: "saved-delete",
                    title: "Delete",
                    onclick: move |_| on_delete.call(entry_id.clone()),
                    "×"
                }
            }
        }
    });

    rsx! {
        div {
            class: "left-notes",
            div {
                class: "left-notes-header",
                h2 { "Saved research" }
                button {
                    class: "clear-saved-button",
                    title: "Delete all saved research",
                    disabled: !can_clear_all,
                    onclick: move |_| on_clear_all.call(()),
                    "Clear all"
                }
            }

            if let Some(message) = listing.error {
                p { class: "left-notes-error", "{message}" }
            }

            if known_empty {
                p { class: "left-notes-empty", "No saved research yet" }
            } else {
                ul { class: "saved-list", {items} }
            }
        }
    }
}
