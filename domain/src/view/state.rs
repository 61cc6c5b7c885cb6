use crate::core::prompt::Prompt;
use crate::council::{CouncilReply, ResponseItem, Verdict};
use serde::Serialize;

/// Where the view is in its submission cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No request in flight; results may or may not be present
    Idle,
    /// A request has been dispatched and has not settled yet
    Submitting,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Submitting => "submitting",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient state of the council client
///
/// Results are replaced wholesale: a new submission clears them before its
/// request is dispatched, and only the settlement carrying the current
/// generation may write them back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CouncilView {
    prompt: String,
    responses: Vec<ResponseItem>,
    verdict: Verdict,
    loading: bool,
    generation: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_error: Option<String>,
}

impl CouncilView {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Accessors --

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn responses(&self) -> &[ResponseItem] {
        &self.responses
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generation of the most recently dispatched submission (0 = none yet)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Diagnostic text of the last failed request, cleared by a success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    pub fn has_results(&self) -> bool {
        !self.responses.is_empty() || !self.verdict.is_empty()
    }

    /// Results as a reply body (for JSON output)
    pub fn reply(&self) -> CouncilReply {
        CouncilReply::new(self.responses.clone(), self.verdict.clone())
    }

    // -- Mutations --

    /// Replace the prompt text. Results are left untouched.
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    /// Enter `Submitting`: set loading and clear prior results.
    ///
    /// Returns the new generation and the prompt to send, or `None` when the
    /// prompt is empty, in which case nothing changes.
    pub fn begin_submission(&mut self) -> Option<(u64, Prompt)> {
        let prompt = Prompt::try_new(self.prompt.clone())?;
        self.generation += 1;
        self.loading = true;
        self.responses.clear();
        self.verdict = Verdict::default();
        self.last_error = None;
        Some((self.generation, prompt))
    }

    /// Settle `generation` with a decoded reply.
    ///
    /// Returns `false` without touching the state if a newer submission has
    /// started since.
    pub fn apply_reply(&mut self, generation: u64, reply: CouncilReply) -> bool {
        if generation != self.generation {
            return false;
        }
        self.responses = reply.individual_responses;
        self.verdict = reply.council_verdict;
        self.last_error = None;
        self.loading = false;
        true
    }

    /// Settle `generation` with a failure. Results stay empty.
    ///
    /// Returns `false` without touching the state if a newer submission has
    /// started since.
    pub fn apply_failure(&mut self, generation: u64, error: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.responses.clear();
        self.verdict = Verdict::default();
        self.last_error = Some(error.into());
        self.loading = false;
        true
    }
}
