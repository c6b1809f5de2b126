use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, warn};
use shared_types::ProcessResponse;

use crate::api::{
    clear_saved_notes, delete_saved_note, fetch_saved_notes, process_requirements, save_output,
    ApiResult,
};
use crate::config::ui_config;
use crate::interop::{confirm, reload_page, rendered_link_urls};
use crate::research::progress::{start_feedback, PollGuard};
use crate::research::state::{
    ResearchState, RunOutcome, RunRejected, RunToken, SaveTicket, SavedNotesState,
};
use crate::research::REFERENCE_LINKS_ID;

const CLEAR_ALL_PROMPT: &str =
    "Are you sure you want to delete all saved research pages? This cannot be undone.";

/// Submit the current requirements to `/process`.
///
/// The loading indicator is derived from the run status, so it is shown
/// before the request starts and hidden when `complete_run` settles it.
/// Progress polling lives in a guard that is dropped as soon as the request
/// returns, on success and failure alike.
pub fn run_research(mut state: Signal<ResearchState>) {
    let ticket = match state.write().begin_run() {
        Ok(ticket) => ticket,
        Err(RunRejected::Busy) => {
            info!("Research run already in progress, ignoring submit");
            return;
        }
        Err(RunRejected::NoRequirements) => return,
    };

    let poll = start_feedback(ui_config().progress, ticket.token, state);

    spawn(async move {
        let result = process_requirements(&ticket.requirements).await;
        if !settle_run(&mut state.write(), ticket.token, poll, result) {
            warn!("Discarding result of superseded run {:?}", ticket.token);
        }
    });
}

/// Stops progress feedback for run `token`, then settles it with `result`.
/// Returns `false` when the run was already superseded.
fn settle_run(
    state: &mut ResearchState,
    token: RunToken,
    poll: Option<PollGuard>,
    result: ApiResult<ProcessResponse>,
) -> bool {
    drop(poll);

    let outcome = match result {
        Ok(response) => {
            info!(
                "Research finished: {} chars, {} explicit references",
                response.output.len(),
                response.references.len()
            );
            RunOutcome::Finished(response)
        }
        Err(e) => {
            error!("Research request failed: {}", e);
            RunOutcome::Failed
        }
    };

    state.complete_run(token, outcome)
}

pub async fn refresh_saved_notes(mut saved: Signal<SavedNotesState>) {
    match fetch_saved_notes().await {
        Ok(entries) => saved.write().replace(entries),
        Err(e) => {
            error!("Failed to fetch saved notes: {}", e);
            saved.write().fail(e.to_string());
        }
    }
}

/// Save the on-screen output as a note, then refresh the saved notes panel.
pub fn confirm_save(mut state: Signal<ResearchState>, saved: Signal<SavedNotesState>) {
    let references = rendered_link_urls(REFERENCE_LINKS_ID);
    let SaveTicket { token, request } = match state.write().confirm_save(references) {
        Ok(ticket) => ticket,
        Err(rejected) => {
            info!("Save not sent: {:?}", rejected);
            return;
        }
    };

    spawn(async move {
        match save_output(&request).await {
            Ok(id) => {
                info!("Saved research {:?} as {:?}", request.title, id);
                if !state.write().finish_save(token, Ok(())) {
                    info!("Save dialog was cancelled before the save finished");
                }
                refresh_saved_notes(saved).await;
            }
            Err(e) => {
                error!("Failed to save research: {}", e);
                state.write().finish_save(token, Err(e.to_string()));
            }
        }
    });
}

pub fn delete_note(id: String, mut saved: Signal<SavedNotesState>) {
    spawn(async move {
        match delete_saved_note(&id).await {
            Ok(()) => refresh_saved_notes(saved).await,
            Err(e) => {
                error!("Failed to delete saved note {}: {}", id, e);
                saved.write().fail(e.to_string());
            }
        }
    });
}

/// Delete every saved note after confirmation, then reload the page.
pub fn clear_all_saved(mut saved: Signal<SavedNotesState>) {
    if !confirm(CLEAR_ALL_PROMPT) {
        return;
    }

    spawn(async move {
        match clear_saved_notes().await {
            Ok(()) => reload_page(),
            Err(e) => {
                error!("Failed to clear saved notes: {}", e);
                saved.write().fail(e.to_string());
            }
        }
    });
}
