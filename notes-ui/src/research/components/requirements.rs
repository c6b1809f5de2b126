use dioxus::prelude::*;

use crate::components::AutoSizeTextarea;
use crate::research::sizing::SizingProfile;
use crate::research::state::ResearchState;
use crate::research::REQUIREMENTS_CONTAINER_ID;

#[component]
pub fn RequirementList(mut state: Signal<ResearchState>) -> Element {
    let fields = state.read().requirements.clone();

    let rows = fields.into_iter().map(move |field| {
        let field_id = field.id.clone();
        rsx! {
            div {
                key: "{field.id}",
                class: "requirement-box",
                AutoSizeTextarea {
                    id: field.id.clone(),
                    class: "requirement-input".to_string(),
                    value: field.text.clone(),
                    placeholder: "Enter your requirement here...".to_string(),
                    profile: SizingProfile::REQUIREMENT,
                    on_input: move |text: String| {
                        state.write().set_requirement(&field_id, text);
                    },
                }
            }
        }
    });

    rsx! {
        div {
            id: REQUIREMENTS_CONTAINER_ID,
            class: "requirements-container",
            {rows}
        }
    }
}
