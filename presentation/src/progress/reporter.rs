//! Loading indicators for the council request

use colored::Colorize;
use council_application::ViewObserver;
use council_domain::CouncilView;
use council_domain::core::string::preview;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const DELIBERATING: &str = "Council is deliberating...";

/// Shows a spinner for as long as the view is loading
pub struct DeliberationSpinner {
    spinner: Mutex<Option<ProgressBar>>,
}

impl DeliberationSpinner {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Whether a spinner is currently displayed
    pub fn is_active(&self) -> bool {
        self.spinner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

impl Default for DeliberationSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewObserver for DeliberationSpinner {
    fn on_view_changed(&self, view: &CouncilView) {
        let mut spinner = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        match (view.is_loading(), spinner.as_ref()) {
            (true, None) => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_prefix(DELIBERATING);
                pb.set_message(preview(view.prompt(), 40));
                pb.enable_steady_tick(Duration::from_millis(100));
                *spinner = Some(pb);
            }
            (false, Some(_)) => {
                if let Some(pb) = spinner.take() {
                    pb.finish_and_clear();
                }
            }
            _ => {}
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress {
    loading: Mutex<bool>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self {
            loading: Mutex::new(false),
        }
    }

    /// Line to print for a loading transition, if any
    fn transition(&self, view: &CouncilView) -> Option<String> {
        let mut loading = self.loading.lock().unwrap_or_else(|e| e.into_inner());
        if *loading == view.is_loading() {
            return None;
        }
        *loading = view.is_loading();

        if view.is_loading() {
            Some(format!("{} {}", "->".cyan(), DELIBERATING.bold()))
        } else if view.has_results() {
            Some(format!(
                "  {} {} responses",
                "v".green(),
                view.responses().len()
            ))
        } else {
            Some(format!("  {} no results", "x".red()))
        }
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewObserver for SimpleProgress {
    fn on_view_changed(&self, view: &CouncilView) {
        if let Some(line) = self.transition(view) {
            eprintln!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::CouncilReply;

    fn loading_view() -> (CouncilView, u64) {
        let mut view = CouncilView::new();
        view.set_prompt("question");
        let (generation, _) = view.begin_submission().unwrap();
        (view, generation)
    }

    #[test]
    fn test_spinner_follows_loading_flag() {
        let spinner = DeliberationSpinner::new();
        let (mut view, generation) = loading_view();

        spinner.on_view_changed(&view);
        assert!(spinner.is_active());

        // repeated loading notifications keep the same spinner
        spinner.on_view_changed(&view);
        assert!(spinner.is_active());

        view.apply_reply(generation, CouncilReply::default());
        spinner.on_view_changed(&view);
        assert!(!spinner.is_active());
    }

    #[test]
    fn test_spinner_ignores_idle_views() {
        let spinner = DeliberationSpinner::new();
        spinner.on_view_changed(&CouncilView::new());
        assert!(!spinner.is_active());
    }

    #[test]
    fn test_simple_progress_reports_transitions_only() {
        let progress = SimpleProgress::new();
        let (mut view, generation) = loading_view();

        assert!(progress.transition(&view).unwrap().contains(DELIBERATING));
        assert!(progress.transition(&view).is_none());

        view.apply_failure(generation, "boom");
        assert!(progress.transition(&view).unwrap().contains("no results"));
        assert!(progress.transition(&view).is_none());
    }
}
