//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::config::{OutputConfig, ReplConfig};
use council_application::{CouncilController, CouncilGateway, SubmitOutcome};
use council_domain::OutputFormat;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// What the loop should do after a slash command
#[derive(Debug, PartialEq, Eq)]
enum CommandAction {
    Continue,
    Quit,
}

/// Interactive chat REPL
pub struct ChatRepl<G: CouncilGateway + 'static> {
    controller: CouncilController<G>,
    format: OutputFormat,
    repl_config: ReplConfig,
}

impl<G: CouncilGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl around a controller
    pub fn new(controller: CouncilController<G>, output: &OutputConfig) -> Self {
        Self {
            controller,
            format: output.format,
            repl_config: ReplConfig::default(),
        }
    }

    pub fn with_repl_config(mut self, config: ReplConfig) -> Self {
        self.repl_config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.repl_config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("council".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandAction::Quit {
                            break;
                        }
                        continue;
                    }

                    let output = self.process_prompt(line).await;
                    println!("{}", output);
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => {}
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         The High Council - Chat Mode        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Endpoint: {}", self.controller.endpoint());
        println!();
        println!("{}", Self::help_text());
    }

    fn help_text() -> &'static str {
        "Commands:\n  \
         /help, /h, /?      - Show this help\n  \
         /endpoint          - Show the council endpoint\n  \
         /last              - Show the last results again\n  \
         /format <fmt>      - Switch output (full, verdict, json)\n  \
         /quit, /exit, /q   - Exit chat\n"
    }

    /// Handle slash commands
    fn handle_command(&mut self, cmd: &str) -> CommandAction {
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandAction::Quit
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("{}", Self::help_text());
                CommandAction::Continue
            }
            "/endpoint" => {
                println!("{}", self.controller.endpoint());
                CommandAction::Continue
            }
            "/last" => {
                let view = self.controller.view();
                println!("{}", ConsoleFormatter::render(&view, self.format));
                CommandAction::Continue
            }
            "/format" => {
                match arg.map(str::parse::<OutputFormat>) {
                    Some(Ok(format)) => {
                        self.format = format;
                        println!("Output format: {:?}", format);
                    }
                    Some(Err(e)) => println!("{}", e),
                    None => println!("Usage: /format <full|verdict|json>"),
                }
                CommandAction::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandAction::Continue
            }
        }
    }

    /// Submit one prompt and render whatever the view settled to
    async fn process_prompt(&self, text: &str) -> String {
        match self.controller.ask(text).await {
            SubmitOutcome::Settled(view) => ConsoleFormatter::render(&view, self.format),
            SubmitOutcome::Skipped | SubmitOutcome::Superseded => String::new(),
        }
    }
}
