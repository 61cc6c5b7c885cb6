//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for council results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Verdict card followed by every individual response
    Full,
    /// Only the council verdict
    Verdict,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Verdict => OutputFormat::Verdict,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for llm-council
#[derive(Parser, Debug)]
#[command(name = "llm-council")]
#[command(author, version, about = "Ask the High Council - one prompt, many models, one verdict")]
#[command(long_about = r#"
llm-council sends your prompt to a council service and shows what came back:
the council's verdict first, then every individual model's answer.

Configuration files are loaded from (in priority order):
1. LLM_COUNCIL_* environment variables
2. --config <path>     Explicit config file
3. ./council.toml      Project-level config
4. ~/.config/llm-council/config.toml   Global config

Example:
  llm-council "Is a hot dog a sandwich?"
  llm-council -o verdict --endpoint http://10.0.0.5:8000/ask-council "Tabs or spaces?"
  llm-council --chat
"#)]
pub struct Cli {
    /// The prompt to submit (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Council endpoint to POST the prompt to
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Give up on the council after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
