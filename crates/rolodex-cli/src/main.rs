mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use rolodex_core::LineClassifier;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{classify, formats, normalize, Context};
use crate::error::{exit_code_for, report_error};
use rolodex_config as config;

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "rolodex CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize a contact file into sorted JSON
    Normalize(normalize::NormalizeArgs),
    /// Classify a single line against the format catalog
    Classify(classify::ClassifyArgs),
    /// List the active formats in priority order
    Formats(formats::FormatsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let catalog = app_config
        .catalog()
        .with_context(|| "build format catalog")?;
    debug!(formats = catalog.len(), "format catalog ready");
    let classifier = LineClassifier::new(catalog);

    let ctx = Context {
        json,
        config: &app_config,
        classifier: &classifier,
    };

    match command {
        Command::Normalize(args) => normalize::normalize(&ctx, args),
        Command::Classify(args) => classify::classify(&ctx, args),
        Command::Formats(args) => formats::list_formats(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
