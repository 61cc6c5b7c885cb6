//! CLI entrypoint for llm-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use council_application::{BehaviorConfig, CouncilController, SubmitOutcome, ViewObserver};
use council_domain::OutputFormat;
use council_infrastructure::{ConfigLoader, FileConfig, HttpCouncilGateway};
use council_presentation::{
    ChatRepl, Cli, ConsoleFormatter, DeliberationSpinner, OutputConfig, ReplConfig,
    SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources(cli.config.as_deref()));
        return Ok(());
    }

    // === Configuration ===
    let config = load_config(&cli)?;

    let endpoint = cli.endpoint.clone().unwrap_or(config.endpoint.url.clone());
    let timeout = cli.timeout.or(config.endpoint.timeout_seconds);
    if timeout == Some(0) {
        bail!("--timeout cannot be 0");
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    info!("Starting llm-council against {}", endpoint);

    // === Dependency Injection ===
    let behavior = BehaviorConfig::from_timeout_seconds(timeout);
    let gateway = Arc::new(
        HttpCouncilGateway::new(endpoint, &behavior).context("Failed to build HTTP client")?,
    );
    let show_progress = !cli.quiet && config.repl.show_progress;
    let mut controller = CouncilController::new(gateway);
    if show_progress {
        // Spinners only make sense on a terminal
        let observer: Arc<dyn ViewObserver> = if std::io::stderr().is_terminal() {
            Arc::new(DeliberationSpinner::new())
        } else {
            Arc::new(SimpleProgress::new())
        };
        controller = controller.with_observer(observer);
    }

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            history_file: config.repl.history_file.clone(),
        };
        let mut repl = ChatRepl::new(controller, &output).with_repl_config(repl_config);
        repl.run().await?;
        return Ok(());
    }

    // Single prompt mode - prompt is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("A prompt is required. Use --chat for interactive mode."),
    };

    match controller.ask(question).await {
        SubmitOutcome::Settled(view) => {
            println!("{}", ConsoleFormatter::render(&view, output.format));
        }
        SubmitOutcome::Skipped => bail!("Prompt cannot be empty"),
        SubmitOutcome::Superseded => {}
    }

    Ok(())
}

/// Load and validate the configuration file stack
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr; `--log-file` adds a non-blocking file writer whose
/// guard must live until exit.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .context("--log-file must name a file")?;
            std::fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create {}", directory.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
