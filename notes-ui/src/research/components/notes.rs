use dioxus::prelude::*;

use crate::components::AutoSizeTextarea;
use crate::research::sizing::SizingProfile;
use crate::research::state::ResearchState;
use crate::research::NOTES_CONTAINER_ID;

/// Free-form scratch notes, unrelated to the research run.
#[component]
pub fn NotesBoard(mut state: Signal<ResearchState>) -> Element {
    let notes = state.read().notes.clone();

    let boxes = notes.into_iter().map(move |note| {
        let note_id = note.id.clone();
        rsx! {
            div {
                key: "{note.id}",
                class: "note-box",
                AutoSizeTextarea {
                    id: note.id.clone(),
                    class: "note-input".to_string(),
                    value: note.text.clone(),
                    placeholder: String::new(),
                    profile: SizingProfile::NOTE,
                    on_input: move |text: String| {
                        state.write().set_note(&note_id, text);
                    },
                }
            }
        }
    });

    rsx! {
        div {
            class: "notes-panel",
            div {
                class: "notes-header",
                h2 { "Notes" }
                button {
                    class: "add-note-button",
                    title: "Add note",
                    onclick: move |_| {
                        state.write().add_note();
                    },
                    "+"
                }
            }
            div {
                id: NOTES_CONTAINER_ID,
                {boxes}
            }
        }
    }
}
