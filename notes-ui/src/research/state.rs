use shared_types::{ProcessResponse, ProgressStatus, SaveOutputRequest, SavedNoteSummary};

use crate::research::references::references_for;
use crate::research::requirements::{collect_requirements, suggested_title};

pub const NO_REQUIREMENTS_NOTICE: &str = "Please enter at least one requirement.";
pub const RUN_FAILED_NOTICE: &str = "An error occurred while processing your request.";
pub const MISSING_TITLE_NOTICE: &str = "Please enter a title for your research";
pub const DEFAULT_PROGRESS_LABEL: &str = "Processing your research request...";
pub const NO_REFERENCES_TEXT: &str = "No reference links available";

/// An editable textarea with a DOM id stable across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub id: String,
    pub text: String,
}

impl TextField {
    fn new(prefix: &str) -> Self {
        Self {
            id: format!("{prefix}-{}", uuid::Uuid::new_v4()),
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct RunProgress {
    pub token: RunToken,
    pub label: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RunStatus {
    #[default]
    Idle,
    Running(RunProgress),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReferencePanel {
    /// Nothing rendered, neither links nor placeholder.
    #[default]
    Cleared,
    Placeholder,
    Links(Vec<String>),
}

impl ReferencePanel {
    pub fn from_links(links: Vec<String>) -> Self {
        if links.is_empty() {
            ReferencePanel::Placeholder
        } else {
            ReferencePanel::Links(links)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunRejected {
    NoRequirements,
    /// A run is already outstanding; the new submit is ignored.
    Busy,
}

/// An accepted submit: what to send and which run it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    pub token: RunToken,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Finished(ProcessResponse),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveRejected {
    Closed,
    MissingTitle,
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaveToken(u64);

/// An accepted save: the request body and the dialog instance it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    pub token: SaveToken,
    pub request: SaveOutputRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SaveDialog {
    pub open: bool,
    pub title: String,
    pub notice: Option<String>,
    /// Save sent from this dialog and not yet answered.
    pub pending: Option<SaveToken>,
}

impl SaveDialog {
    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResearchState {
    pub requirements: Vec<TextField>,
    pub output: String,
    pub references: ReferencePanel,
    /// Inline message shown in the output area.
    pub notice: Option<String>,
    pub status: RunStatus,
    pub save: SaveDialog,
    pub notes: Vec<TextField>,
    last_token: u64,
    last_save_token: u64,
}

impl Default for ResearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResearchState {
    pub fn new() -> Self {
        Self {
            requirements: vec![TextField::new("requirement")],
            output: String::new(),
            references: ReferencePanel::default(),
            notice: None,
            status: RunStatus::Idle,
            save: SaveDialog::default(),
            notes: Vec::new(),
            last_token: 0,
            last_save_token: 0,
        }
    }

    // ------------------------------------------------------------------
    // Requirements
    // ------------------------------------------------------------------

    pub fn add_requirement(&mut self) -> String {
        let field = TextField::new("requirement");
        let id = field.id.clone();
        self.requirements.push(field);
        id
    }

    pub fn set_requirement(&mut self, id: &str, text: String) {
        if let Some(field) = self.requirements.iter_mut().find(|f| f.id == id) {
            field.text = text;
        }
    }

    pub fn collected_requirements(&self) -> Vec<String> {
        let texts: Vec<&str> = self.requirements.iter().map(|f| f.text.as_str()).collect();
        collect_requirements(&texts[..])
    }

    // ------------------------------------------------------------------
    // Run lifecycle
    // ------------------------------------------------------------------

    pub fn is_busy(&self) -> bool {
        matches!(self.status, RunStatus::Running(_))
    }

    pub fn begin_run(&mut self) -> Result<RunTicket, RunRejected> {
        if self.is_busy() {
            return Err(RunRejected::Busy);
        }

        let requirements = self.collected_requirements();
        if requirements.is_empty() {
            self.notice = Some(NO_REQUIREMENTS_NOTICE.to_string());
            return Err(RunRejected::NoRequirements);
        }

        self.last_token += 1;
        let token = RunToken(self.last_token);
        self.notice = None;
        self.status = RunStatus::Running(RunProgress {
            token,
            label: DEFAULT_PROGRESS_LABEL.to_string(),
            percent: 0.0,
        });

        Ok(RunTicket {
            token,
            requirements,
        })
    }

    /// Returns whether polling should continue for this run.
    pub fn apply_progress(&mut self, token: RunToken, status: &ProgressStatus) -> bool {
        let RunStatus::Running(progress) = &mut self.status else {
            return false;
        };
        if progress.token != token {
            return false;
        }

        progress.label = status
            .task_label()
            .unwrap_or(DEFAULT_PROGRESS_LABEL)
            .to_string();
        progress.percent = status.progress.clamp(0.0, 100.0);

        !status.is_complete()
    }

    /// Settles the run. Returns `false` when `token` is not the outstanding run.
    pub fn complete_run(&mut self, token: RunToken, outcome: RunOutcome) -> bool {
        match &self.status {
            RunStatus::Running(progress) if progress.token == token => {}
            _ => return false,
        }
        self.status = RunStatus::Idle;

        match outcome {
            RunOutcome::Finished(response) => {
                self.references = ReferencePanel::from_links(references_for(
                    &response.output,
                    &response.references,
                ));
                self.output = response.output;
                self.notice = None;
            }
            RunOutcome::Failed => {
                self.notice = Some(RUN_FAILED_NOTICE.to_string());
            }
        }
        true
    }

    /// The output area stays editable; saves send what is on screen.
    pub fn set_output(&mut self, text: String) {
        self.output = text;
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
        self.references = ReferencePanel::Cleared;
        self.notice = None;
    }

    // ------------------------------------------------------------------
    // Save dialog
    // ------------------------------------------------------------------

    pub fn open_save_dialog(&mut self) {
        if let Some(title) = suggested_title(&self.collected_requirements()) {
            self.save.title = title;
        }
        self.save.open = true;
        self.save.notice = None;
    }

    pub fn set_save_title(&mut self, title: String) {
        self.save.title = title;
    }

    /// Builds the save request. `references` are the URLs currently rendered.
    pub fn confirm_save(&mut self, references: Vec<String>) -> Result<SaveTicket, SaveRejected> {
        if !self.save.open {
            return Err(SaveRejected::Closed);
        }
        if self.save.is_saving() {
            return Err(SaveRejected::InFlight);
        }

        let title = self.save.title.trim().to_string();
        if title.is_empty() {
            self.save.notice = Some(MISSING_TITLE_NOTICE.to_string());
            return Err(SaveRejected::MissingTitle);
        }

        self.last_save_token += 1;
        let token = SaveToken(self.last_save_token);
        self.save.pending = Some(token);
        self.save.notice = None;

        Ok(SaveTicket {
            token,
            request: SaveOutputRequest {
                title,
                requirements: self.collected_requirements(),
                content: self.output.clone(),
                references,
            },
        })
    }

    /// Settles save `token`. Returns `false` when the dialog that sent it was
    /// cancelled in the meantime; output and references stay on screen either way.
    pub fn finish_save(&mut self, token: SaveToken, result: Result<(), String>) -> bool {
        if self.save.pending != Some(token) {
            return false;
        }
        self.save.pending = None;

        match result {
            Ok(()) => {
                self.save.open = false;
                self.save.title.clear();
                self.save.notice = None;
            }
            Err(message) => {
                self.save.notice = Some(format!("Could not save: {message}"));
            }
        }
        true
    }

    /// Detaches any save still in flight from the dialog.
    pub fn cancel_save(&mut self) {
        self.save = SaveDialog::default();
    }

    // ------------------------------------------------------------------
    // Notes board
    // ------------------------------------------------------------------

    pub fn add_note(&mut self) -> String {
        let field = TextField::new("note");
        let id = field.id.clone();
        self.notes.push(field);
        id
    }

    pub fn set_note(&mut self, id: &str, text: String) {
        if let Some(field) = self.notes.iter_mut().find(|f| f.id == id) {
            field.text = text;
        }
    }
}

/// Contents of the saved notes panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedNotesState {
    pub entries: Vec<SavedNoteSummary>,
    pub error: Option<String>,
    /// Set once a listing has been received.
    pub loaded: bool,
}

impl SavedNotesState {
    pub fn replace(&mut self, entries: Vec<SavedNoteSummary>) {
        self.entries = entries;
        self.error = None;
        self.loaded = true;
    }

    /// Clear-all stays available unless the backend listed nothing.
    pub fn can_clear_all(&self) -> bool {
        !self.known_empty()
    }

    pub fn known_empty(&self) -> bool {
        self.loaded && self.error.is_none() && self.entries.is_empty()
    }

    /// Keeps the last good listing on screen.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
    }
}
