use dioxus::prelude::*;

use crate::components::AutoSizeTextarea;
use crate::config::ProgressFeedback;
use crate::interop::fit_textarea;
use crate::research::sizing::SizingProfile;
use crate::research::state::{ReferencePanel, ResearchState, RunProgress, NO_REFERENCES_TEXT};
use crate::research::{OUTPUT_TEXT_ID, REFERENCE_LINKS_ID};

#[component]
pub fn OutputPanel(mut state: Signal<ResearchState>) -> Element {
    let output = state.read().output.clone();
    let notice = state.read().notice.clone();

    // Programmatic updates (results, trash) bypass `oninput`.
    use_effect(move || {
        let _ = state.read().output.len();
        fit_textarea(OUTPUT_TEXT_ID, SizingProfile::OUTPUT);
    });

    rsx! {
        div {
            class: "output-panel",
            if let Some(message) = notice {
                p { class: "output-notice", "{message}" }
            }
            AutoSizeTextarea {
                id: OUTPUT_TEXT_ID.to_string(),
                class: "output-text".to_string(),
                value: output,
                placeholder: "Research output will appear here...".to_string(),
                profile: SizingProfile::OUTPUT,
                on_input: move |text: String| state.write().set_output(text),
            }
        }
    }
}

#[component]
pub fn ReferenceLinks(references: ReferencePanel) -> Element {
    let body = match references {
        ReferencePanel::Cleared => rsx! {},
        ReferencePanel::Placeholder => rsx! {
            p { class: "reference-placeholder", {NO_REFERENCES_TEXT} }
        },
        ReferencePanel::Links(links) => {
            let anchors = links.into_iter().map(|link| {
                rsx! {
                    div {
                        key: "{link}",
                        class: "reference-link",
                        a {
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link}"
                        }
                    }
                }
            });
            rsx! { {anchors} }
        }
    };

    rsx! {
        div {
            id: REFERENCE_LINKS_ID,
            class: "reference-links",
            {body}
        }
    }
}

#[component]
pub fn LoadingIndicator(progress: RunProgress, feedback: ProgressFeedback) -> Element {
    let bar_style = match feedback {
        ProgressFeedback::Poll { .. } => Some(format!(
            "width: {:.0}%; transition: width 0.2s linear;",
            progress.percent
        )),
        ProgressFeedback::Animation { duration_ms } => Some(format!(
            "animation: progress {duration_ms}ms linear forwards;"
        )),
        ProgressFeedback::Off => None,
    };

    rsx! {
        div {
            class: "loading-container",
            div { class: "loading-spinner" }
            p { class: "loading-text", "{progress.label}" }
            if let Some(style) = bar_style {
                div {
                    class: "progress-track",
                    div { class: "progress", style: "{style}" }
                }
            }
        }
    }
}
