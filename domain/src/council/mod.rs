//! Council reply value objects
//!
//! These types mirror the JSON body the council service returns:
//!
//! ```json
//! {
//!   "individual_responses": [{"model": "A", "answer": "x"}],
//!   "council_verdict": "V"
//! }
//! ```

mod reply;

pub use reply::{CouncilReply, ResponseItem, Verdict};
