//! Council controller use case
//!
//! Owns the [`CouncilView`] and runs one submission cycle per call to
//! [`CouncilController::submit`]:
//!
//! 1. Guard: an empty prompt is a no-op
//! 2. Enter loading state and clear prior results
//! 3. Issue exactly one request through the [`CouncilGateway`]
//! 4. Populate results on success, record the error on failure
//! 5. Leave loading state
//!
//! Overlapping submissions are allowed. Each one takes a new generation and
//! only the latest may settle the view. Observers are notified while the view
//! lock is held, so they see mutations in the order they happened.

use crate::ports::council_gateway::CouncilGateway;
use crate::ports::view_observer::{NoObserver, ViewObserver};
use council_domain::core::string::preview;
use council_domain::{CouncilView, Phase};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

/// Result of one call to [`CouncilController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The prompt was empty; no state changed and no request was sent
    Skipped,
    /// The request settled and its outcome is in the view
    Settled(CouncilView),
    /// A newer submission started before this one settled; its reply was dropped
    Superseded,
}

impl SubmitOutcome {
    /// The settled view, if this submission got to write it
    pub fn view(&self) -> Option<&CouncilView> {
        match self {
            SubmitOutcome::Settled(view) => Some(view),
            _ => None,
        }
    }
}

/// View/controller unit for the council client
pub struct CouncilController<G: CouncilGateway + 'static> {
    gateway: Arc<G>,
    view: Mutex<CouncilView>,
    observer: Arc<dyn ViewObserver>,
}

impl<G: CouncilGateway + 'static> CouncilController<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            view: Mutex::new(CouncilView::new()),
            observer: Arc::new(NoObserver),
        }
    }

    /// Attach an observer notified after every view mutation
    pub fn with_observer(mut self, observer: Arc<dyn ViewObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn endpoint(&self) -> &str {
        self.gateway.endpoint()
    }

    /// Snapshot of the current view
    pub fn view(&self) -> CouncilView {
        self.lock_view().clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock_view().phase()
    }

    /// Replace the prompt text
    pub fn set_prompt(&self, text: impl Into<String>) {
        let mut view = self.lock_view();
        view.set_prompt(text);
        self.observer.on_view_changed(&view);
    }

    /// Set the prompt and submit it
    pub async fn ask(&self, text: impl Into<String>) -> SubmitOutcome {
        self.set_prompt(text);
        self.submit().await
    }

    /// Submit the current prompt
    pub async fn submit(&self) -> SubmitOutcome {
        let begun = {
            let mut view = self.lock_view();
            let begun = view.begin_submission();
            if begun.is_some() {
                self.observer.on_view_changed(&view);
            }
            begun
        };
        let Some((generation, prompt)) = begun else {
            debug!("Ignoring submission with an empty prompt");
            return SubmitOutcome::Skipped;
        };

        info!(
            generation,
            endpoint = self.gateway.endpoint(),
            "Consulting council: {}",
            preview(prompt.content(), 60)
        );

        let result = self.gateway.consult(&prompt).await;

        let settled = {
            let mut view = self.lock_view();
            let applied = match result {
                Ok(reply) => {
                    info!(
                        generation,
                        "Council replied with {} responses",
                        reply.individual_responses.len()
                    );
                    view.apply_reply(generation, reply)
                }
                Err(e) => {
                    error!(generation, "Error: {}", e);
                    view.apply_failure(generation, e.to_string())
                }
            };
            if applied {
                self.observer.on_view_changed(&view);
            }
            applied.then(|| view.clone())
        };

        match settled {
            Some(view) => SubmitOutcome::Settled(view),
            None => {
                warn!(generation, "Discarding reply of a superseded submission");
                SubmitOutcome::Superseded
            }
        }
    }

    fn lock_view(&self) -> MutexGuard<'_, CouncilView> {
        self.view.lock().unwrap_or_else(|e| e.into_inner())
    }
}
