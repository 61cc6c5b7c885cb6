//! View observer port
//!
//! Defines how the presentation layer learns about view state changes.

use council_domain::CouncilView;

/// Callback invoked after every mutation of the council view
///
/// Implementations live in the presentation layer (spinner, plain text
/// status, a future TUI) and re-render from the snapshot they receive.
///
/// Called with the controller's view lock held: implementations must return
/// quickly and must not call back into the controller.
pub trait ViewObserver: Send + Sync {
    fn on_view_changed(&self, view: &CouncilView);
}

/// No-op observer for when nothing needs to be re-rendered
pub struct NoObserver;

impl ViewObserver for NoObserver {
    fn on_view_changed(&self, _view: &CouncilView) {}
}
