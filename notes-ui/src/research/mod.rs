//! Research workflow: requirements in, report and references out, plus
//! saving results as notes.

pub mod components;
pub mod effects;
pub mod progress;
pub mod references;
pub mod requirements;
pub mod sizing;
pub mod state;
pub mod theme;

// DOM ids kept stable for the page stylesheet
pub const ADD_REQUIREMENT_ID: &str = "addRequirement";
pub const REQUIREMENTS_CONTAINER_ID: &str = "requirementsContainer";
pub const RUN_BUTTON_ID: &str = "runButton";
pub const TRASH_BUTTON_ID: &str = "trashButton";
pub const SAVE_BUTTON_ID: &str = "saveButton";
pub const SAVE_MODAL_ID: &str = "saveModal";
pub const SAVE_TITLE_ID: &str = "saveTitle";
pub const CONFIRM_SAVE_ID: &str = "confirmSave";
pub const CANCEL_SAVE_ID: &str = "cancelSave";
pub const OUTPUT_TEXT_ID: &str = "outputText";
pub const REFERENCE_LINKS_ID: &str = "referenceLinks";
pub const NOTES_CONTAINER_ID: &str = "notesContainer";
