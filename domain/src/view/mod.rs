//! Client view state
//!
//! [`CouncilView`] is the single source of truth for everything the client
//! renders. It owns the submission state machine:
//!
//! ```text
//! Idle ──begin_submission (non-empty prompt)──▶ Submitting
//! Submitting ──apply_reply / apply_failure (current generation)──▶ Idle
//! ```

mod state;

pub use state::{CouncilView, Phase};
