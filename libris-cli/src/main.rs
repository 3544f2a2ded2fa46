//! Libris - an in-memory book catalogue driven by single commands
//!
//! Each invocation builds a fresh catalogue, preloads any configured data
//! files, then runs exactly one command against it.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use libris_core::config::LibrisConfig;
use libris_core::loader::FileLoader;
use libris_core::{dispatch, Catalogue};

/// Trace modules for detailed tracing
#[derive(Debug, Clone, ValueEnum)]
enum TraceModule {
    Loader,
    Commands,
    All,
}

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "libris",
    about = "Manage an in-memory book catalogue, one command per run",
    version
)]
struct Cli {
    /// Command to run: ADD, LIST, SEARCH, REMOVE or GROUP
    command: String,

    /// Argument for the command; several words are joined with spaces
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    argument: Vec<String>,

    /// Data file to ADD before running the command (repeatable)
    #[clap(long = "data", value_name = "FILE")]
    data: Vec<String>,

    /// Override configuration file path
    #[clap(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable detailed tracing (comma-separated: loader,commands,all)
    #[clap(long, value_delimiter = ',')]
    trace: Vec<TraceModule>,

    /// Set log level
    #[clap(long, default_value = "warn")]
    log_level: LogLevel,
}

/// Initialize tracing with CLI flags
///
/// `RUST_LOG` takes precedence over `--log-level`. With `--trace` the output
/// switches to JSON. Logs always go to stderr so stdout stays clean.
fn initialize_tracing(log_level: &LogLevel, trace_modules: &[TraceModule]) {
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    for module in trace_modules {
        let directive = match module {
            TraceModule::Loader => "libris_core::loader=trace",
            TraceModule::Commands => "libris_core::commands=trace",
            TraceModule::All => "libris_core=trace",
        };

        if let Ok(parsed) = directive.parse() {
            filter = filter.add_directive(parsed);
        }
    }

    if !trace_modules.is_empty() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(io::stderr)
            .init();

        tracing::info!(trace_modules = ?trace_modules, "Libris tracing enabled");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, &cli.trace);

    let config = LibrisConfig::discover(cli.config.as_deref())?;
    debug!(?config, "Configuration resolved");

    let mut catalogue = Catalogue::with_loader(FileLoader::new(config.loader.clone()));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let preload = config
        .preload
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .chain(cli.data.iter().cloned());
    for path in preload {
        let add = dispatch("ADD", Some(path.as_str()))
            .with_context(|| format!("Cannot preload {path}"))?;
        add.execute(&mut catalogue, &mut out)
            .with_context(|| format!("Failed to preload {path}"))?;
    }
    info!(entries = catalogue.len(), "Catalogue ready");

    let argument = cli.argument.join(" ");
    let command = dispatch(&cli.command, Some(argument.as_str()))?;
    command.execute(&mut catalogue, &mut out)?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}
