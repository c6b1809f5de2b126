use dioxus::prelude::*;

use crate::research::state::ResearchState;
use crate::research::{CANCEL_SAVE_ID, CONFIRM_SAVE_ID, SAVE_MODAL_ID, SAVE_TITLE_ID};

/// Title prompt shown before saving. Clicking the backdrop cancels.
#[component]
pub fn SaveModal(mut state: Signal<ResearchState>, on_confirm: Callback<()>) -> Element {
    let dialog = state.read().save.clone();
    if !dialog.open {
        return rsx! {};
    }
    let saving = dialog.is_saving();

    rsx! {
        div {
            id: SAVE_MODAL_ID,
            class: "modal",
            onclick: move |_| state.write().cancel_save(),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                h3 { "Save research" }
                input {
                    id: SAVE_TITLE_ID,
                    r#type: "text",
                    placeholder: "Enter a title for your research",
                    value: "{dialog.title}",
                    oninput: move |e| state.write().set_save_title(e.value()),
                    onmounted: move |e| async move {
                        let _ = e.set_focus(true).await;
                    },
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            on_confirm.call(());
                        } else if e.key() == Key::Escape {
                            state.write().cancel_save();
                        }
                    }
                }
                if let Some(message) = dialog.notice.clone() {
                    p { class: "modal-notice", "{message}" }
                }
                div {
                    class: "modal-buttons",
                    button {
                        id: CANCEL_SAVE_ID,
                        class: "secondary-button",
                        onclick: move |_| state.write().cancel_save(),
                        "Cancel"
                    }
                    button {
                        id: CONFIRM_SAVE_ID,
                        class: "primary-button",
                        disabled: saving,
                        onclick: move |_| on_confirm.call(()),
                        if saving { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
