//! Console output formatter for the council view

use colored::Colorize;
use council_domain::{CouncilView, OutputFormat};

const TITLE: &str = "The High Council";
const WIDTH: usize = 60;

/// Formats the council view for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render the view in the requested format
    pub fn render(view: &CouncilView, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(view),
            OutputFormat::Verdict => Self::format_verdict_only(view),
            OutputFormat::Json => Self::format_json(view),
        }
    }

    /// Verdict card first, then one card per individual response
    pub fn format(view: &CouncilView) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(TITLE));
        output.push('\n');

        if view.is_loading() {
            output.push_str(&format!("\n{}\n", "Council is deliberating...".dimmed()));
        } else if !view.has_results() {
            output.push_str(&format!("\n{}\n", "(no results)".dimmed()));
        }

        if !view.verdict().is_empty() {
            output.push_str(&Self::section_header("The Council's Decision"));
            output.push_str(&format!("\n{}\n", view.verdict()));
        }

        if !view.responses().is_empty() {
            output.push_str(&Self::section_header("Individual Opinions"));
            for item in view.responses() {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", item.model).yellow().bold(),
                    item.answer
                ));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Verdict text only (empty when there is none)
    pub fn format_verdict_only(view: &CouncilView) -> String {
        view.verdict().to_string()
    }

    /// The results as the JSON body the council returned
    pub fn format_json(view: &CouncilView) -> String {
        serde_json::to_string_pretty(&view.reply()).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = WIDTH
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(WIDTH).cyan())
    }
}
