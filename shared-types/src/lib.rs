//! Shared types between the research notes frontend and its backend
//!
//! These types describe the JSON bodies exchanged with:
//! - `POST /process`, `GET /progress`
//! - `POST /save_output`, `GET /saved_outputs`
//! - `DELETE /clear_saved`, `DELETE /delete_output/{id}`
//!
//! Serializable with serde; TypeScript bindings are exported with ts-rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Endpoints
// ============================================================================

pub const PROCESS_PATH: &str = "/process";
pub const PROGRESS_PATH: &str = "/progress";
pub const SAVE_OUTPUT_PATH: &str = "/save_output";
pub const SAVED_OUTPUTS_PATH: &str = "/saved_outputs";
pub const CLEAR_SAVED_PATH: &str = "/clear_saved";
pub const DELETE_OUTPUT_PATH: &str = "/delete_output";
pub const VIEW_SAVED_PATH: &str = "/view_saved";

/// Local storage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

pub fn delete_output_path(id: &str) -> String {
    format!("{DELETE_OUTPUT_PATH}/{id}")
}

pub fn view_saved_path(id: &str) -> String {
    format!("{VIEW_SAVED_PATH}/{id}")
}

// ============================================================================
// Research run
// ============================================================================

/// Body of `POST /process`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../notes-ui/bindings/generated.ts")]
pub struct ProcessRequest {
    pub requirements: Vec<String>,
}

/// Result of a research run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../notes-ui/bindings/generated.ts")]
pub struct ProcessResponse {
    /// Report text, possibly containing a `<sources>` block
    pub output: String,

    /// Reference URLs reported alongside the output
    #[serde(default)]
    pub references: Vec<String>,
}

/// Snapshot returned by `GET /progress`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../notes-ui/bindings/generated.ts")]
pub struct ProgressStatus {
    /// Human readable description of the current stage
    #[serde(default)]
    pub task: Option<String>,

    /// Percentage in 0..=100
    #[serde(default)]
    pub progress: f64,
}

impl ProgressStatus {
    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }

    /// Task description, `None` when the backend sent nothing useful.
    pub fn task_label(&self) -> Option<&str> {
        self.task
            .as_deref()
            .map(str::trim)
            .filter(|task| !task.is_empty())
    }
}

// ============================================================================
// Saved notes
// ============================================================================

/// Body of `POST /save_output`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../notes-ui/bindings/generated.ts")]
pub struct SaveOutputRequest {
    pub title: String,
    pub requirements: Vec<String>,
    pub content: String,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../notes-ui/bindings/generated.ts")]
pub struct SaveOutputResponse {
    pub success: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Generic `{ success, error? }` reply of the delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../notes-ui/bindings/generated.ts")]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// One entry of the saved notes panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../notes-ui/bindings/generated.ts")]
pub struct SavedNoteSummary {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Reply of `GET /saved_outputs`, newest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../notes-ui/bindings/generated.ts")]
pub struct SavedNotesResponse {
    pub success: bool,
    #[serde(default)]
    pub outputs: Vec<SavedNoteSummary>,
}

// ============================================================================
// Theme
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../notes-ui/bindings/generated.ts")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything but `"dark"` falls back to light.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
