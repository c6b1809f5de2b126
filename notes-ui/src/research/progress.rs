use std::future::Future;

use dioxus::prelude::*;
use futures_util::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;

use crate::api::fetch_progress;
use crate::config::ProgressFeedback;
use crate::research::state::{ResearchState, RunToken};

/// Owns a background poll loop. Dropping it aborts the loop, including any
/// `/progress` request still pending.
#[derive(Debug)]
pub struct PollGuard {
    handle: AbortHandle,
}

impl PollGuard {
    pub fn wrap<F: Future>(future: F) -> (Self, Abortable<F>) {
        let (handle, registration) = AbortHandle::new_pair();
        (Self { handle }, Abortable::new(future, registration))
    }
}

impl Drop for PollGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Starts whatever background activity `feedback` needs for run `token`.
pub fn start_feedback(
    feedback: ProgressFeedback,
    token: RunToken,
    state: Signal<ResearchState>,
) -> Option<PollGuard> {
    match feedback {
        ProgressFeedback::Poll { interval_ms } => {
            let (guard, poll) = PollGuard::wrap(poll_progress(token, interval_ms, state));
            spawn(async move {
                let _ = poll.await;
            });
            Some(guard)
        }
        ProgressFeedback::Animation { .. } | ProgressFeedback::Off => None,
    }
}

async fn poll_progress(token: RunToken, interval_ms: u32, mut state: Signal<ResearchState>) {
    loop {
        TimeoutFuture::new(interval_ms).await;

        match fetch_progress().await {
            Ok(status) => {
                if !state.write().apply_progress(token, &status) {
                    break;
                }
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("Error fetching progress: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn dropping_guard_aborts_loop() {
        let (guard, poll) = PollGuard::wrap(futures::future::pending::<()>());
        drop(guard);

        assert!(block_on(poll).is_err());
    }

    #[test]
    fn loop_that_finishes_on_its_own_is_not_aborted() {
        let (guard, poll) = PollGuard::wrap(async { 100 });

        assert_eq!(block_on(poll), Ok(100));
        drop(guard);
    }
}
