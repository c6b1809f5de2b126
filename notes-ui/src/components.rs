use dioxus::prelude::*;
use shared_types::Theme;

use crate::config::ui_config;
use crate::interop::fit_textarea;
use crate::research::components::{
    LoadingIndicator, NotesBoard, OutputPanel, ReferenceLinks, RequirementList, SaveModal,
    SavedNotesPanel,
};
use crate::research::effects::{
    clear_all_saved, confirm_save, delete_note, refresh_saved_notes, run_research,
};
use crate::research::sizing::SizingProfile;
use crate::research::state::{ResearchState, RunStatus, SavedNotesState};
use crate::research::theme::{initialize_theme, toggle_theme};
use crate::research::{ADD_REQUIREMENT_ID, RUN_BUTTON_ID, SAVE_BUTTON_ID, TRASH_BUTTON_ID};

/// Textarea that grows with its content down to `profile`'s minimum.
#[component]
pub fn AutoSizeTextarea(
    id: String,
    class: String,
    value: String,
    placeholder: String,
    profile: SizingProfile,
    on_input: Callback<String>,
) -> Element {
    let id_for_mount = id.clone();
    let id_for_input = id.clone();

    rsx! {
        textarea {
            id: "{id}",
            class: "{class}",
            rows: "1",
            placeholder: "{placeholder}",
            value: "{value}",
            onmounted: move |_| {
                fit_textarea(&id_for_mount, profile);
            },
            oninput: move |e| {
                on_input.call(e.value());
                fit_textarea(&id_for_input, profile);
            },
        }
    }
}

#[component]
pub fn ResearchPage() -> Element {
    let mut state = use_signal(ResearchState::new);
    let saved = use_signal(SavedNotesState::default);
    let mut theme = use_signal(initialize_theme);
    let feedback = ui_config().progress;

    // Saved notes panel
    use_effect(move || {
        spawn(refresh_saved_notes(saved));
    });

    let on_toggle_theme = use_callback(move |_| {
        let next = toggle_theme(theme());
        theme.set(next);
    });
    let on_confirm_save = use_callback(move |_| confirm_save(state, saved));
    let on_delete = use_callback(move |id: String| delete_note(id, saved));
    let on_clear_all = use_callback(move |_| clear_all_saved(saved));

    let snapshot = state.read();
    let busy = snapshot.is_busy();
    let progress = match &snapshot.status {
        RunStatus::Running(progress) => Some(progress.clone()),
        RunStatus::Idle => None,
    };
    let references = snapshot.references.clone();
    drop(snapshot);

    rsx! {
        style { {PAGE_STYLES} }

        div {
            class: "page",

            header {
                class: "page-header",
                h1 { "Research Helper" }
                button {
                    class: "theme-toggle",
                    title: "Toggle theme",
                    onclick: move |_| on_toggle_theme.call(()),
                    if theme() == Theme::Dark { "☀️" } else { "🌙" }
                }
            }

            main {
                class: "page-body",

                aside {
                    class: "left-column",
                    SavedNotesPanel { saved, on_delete, on_clear_all }
                }

                section {
                    class: "research-column",

                    h2 { "Requirements" }
                    RequirementList { state }
                    div {
                        class: "toolbar",
                        button {
                            id: ADD_REQUIREMENT_ID,
                            class: "secondary-button",
                            onclick: move |_| {
                                state.write().add_requirement();
                            },
                            "+ Add requirement"
                        }
                        button {
                            id: RUN_BUTTON_ID,
                            class: "primary-button",
                            disabled: busy,
                            onclick: move |_| run_research(state),
                            "Run"
                        }
                    }

                    if let Some(progress) = progress {
                        LoadingIndicator { progress, feedback }
                    }

                    div {
                        class: "output-header",
                        h2 { "Output" }
                        div {
                            class: "toolbar",
                            button {
                                id: SAVE_BUTTON_ID,
                                class: "secondary-button",
                                title: "Save as note",
                                onclick: move |_| state.write().open_save_dialog(),
                                "Save"
                            }
                            button {
                                id: TRASH_BUTTON_ID,
                                class: "secondary-button",
                                title: "Clear output",
                                onclick: move |_| state.write().clear_output(),
                                "Clear"
                            }
                        }
                    }
                    OutputPanel { state }

                    h2 { "References" }
                    ReferenceLinks { references }
                }

                aside {
                    class: "right-column",
                    NotesBoard { state }
                }
            }

            SaveModal { state, on_confirm: on_confirm_save }
        }
    }
}

const PAGE_STYLES: &str = r#"
:root {
    --bg-color: #f8fafc;
    --panel-bg: #ffffff;
    --text-color: #0f172a;
    --muted-color: #64748b;
    --border-color: #cbd5e1;
    --accent-bg: #3b82f6;
    --danger-bg: #dc2626;
}

[data-theme="dark"] {
    --bg-color: #111827;
    --panel-bg: #1f2937;
    --text-color: #f8fafc;
    --muted-color: #94a3b8;
    --border-color: #374151;
}

body {
    margin: 0;
    background: var(--bg-color);
    color: var(--text-color);
    font-family: system-ui, -apple-system, sans-serif;
}

.page-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1.5rem;
    border-bottom: 1px solid var(--border-color);
}

.page-body {
    display: grid;
    grid-template-columns: 16rem 1fr 16rem;
    gap: 1.5rem;
    padding: 1.5rem;
}

.left-notes, .notes-panel, .output-panel, .reference-links {
    background: var(--panel-bg);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 0.75rem;
}

.left-notes-header, .notes-header, .output-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.saved-list {
    list-style: none;
    padding: 0;
    margin: 0;
}

.saved-item {
    display: flex;
    align-items: baseline;
    gap: 0.5rem;
    padding: 0.25rem 0;
}

.saved-date, .left-notes-empty {
    color: var(--muted-color);
    font-size: 0.75rem;
}

textarea {
    width: 100%;
    box-sizing: border-box;
    resize: none;
    overflow: hidden;
    background: var(--panel-bg);
    color: var(--text-color);
    border: 1px solid var(--border-color);
    border-radius: 6px;
    padding: 0.5rem;
    font: inherit;
}

.output-text {
    min-height: 200px;
    padding-bottom: 20px;
}

.requirement-box, .note-box {
    margin-bottom: 0.5rem;
}

.toolbar {
    display: flex;
    gap: 0.5rem;
    margin: 0.5rem 0;
}

.primary-button, .secondary-button, .clear-saved-button, .add-note-button, .theme-toggle {
    cursor: pointer;
    border-radius: 6px;
    padding: 0.375rem 0.75rem;
    font-size: 0.875rem;
}

.primary-button {
    background: var(--accent-bg);
    color: white;
    border: none;
}

.primary-button:disabled {
    opacity: 0.6;
    cursor: progress;
}

.secondary-button, .add-note-button, .theme-toggle {
    background: transparent;
    color: var(--text-color);
    border: 1px solid var(--border-color);
}

.clear-saved-button, .saved-delete {
    background: transparent;
    color: var(--danger-bg);
    border: none;
    cursor: pointer;
}

.output-notice, .modal-notice, .left-notes-error {
    color: var(--danger-bg);
    margin: 0 0 0.5rem 0;
}

.loading-container {
    margin: 1rem 0;
}

.loading-text {
    margin: 0.25rem 0;
    color: var(--muted-color);
}

.progress-track {
    height: 6px;
    background: var(--border-color);
    border-radius: 3px;
    overflow: hidden;
}

.progress {
    height: 100%;
    width: 0%;
    background: var(--accent-bg);
}

@keyframes progress {
    from { width: 0%; }
    to { width: 100%; }
}

.reference-placeholder {
    color: var(--text-color);
    opacity: 0.7;
}

.reference-link a {
    color: var(--accent-bg);
    word-break: break-all;
}

.modal {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}

.modal-content {
    background: var(--panel-bg);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 1.5rem;
    min-width: 320px;
    max-width: 90vw;
}

.modal-content input {
    width: 100%;
    box-sizing: border-box;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border-color);
    border-radius: 6px;
    background: var(--bg-color);
    color: var(--text-color);
}

.modal-buttons {
    display: flex;
    justify-content: flex-end;
    gap: 0.5rem;
    margin-top: 1rem;
}
"#;
