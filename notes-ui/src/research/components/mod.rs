mod notes;
mod output;
mod requirements;
mod save_modal;
mod saved_notes;

pub use notes::NotesBoard;
pub use output::{LoadingIndicator, OutputPanel, ReferenceLinks};
pub use requirements::RequirementList;
pub use save_modal::SaveModal;
pub use saved_notes::SavedNotesPanel;
