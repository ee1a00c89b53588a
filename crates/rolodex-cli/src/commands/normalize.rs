use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use rolodex_ingest::{self as ingest, NormalizeReport};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const STDIN_MARKER: &str = "-";

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input file, `-` for stdin. Defaults to the configured input.
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Print the normalized document instead of writing a file.
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,
}

#[derive(Debug, Serialize)]
struct NormalizeSummary {
    entries: usize,
    errors: Vec<usize>,
    output: String,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let input = args.input.unwrap_or_else(|| ctx.config.input.clone());
    let lines = if input.as_os_str() == STDIN_MARKER {
        ingest::read_lines(io::stdin().lock()).with_context(|| "read stdin")?
    } else {
        ingest::read_file(&input)?
    };
    debug!(input = %input.display(), lines = lines.len(), "input read");

    let report = ingest::normalize_lines(ctx.classifier, &lines);

    if args.stdout {
        let stdout = io::stdout().lock();
        return ingest::write_json(stdout, &report).with_context(|| "write report to stdout");
    }

    let out = args.out.unwrap_or_else(|| ctx.config.output.clone());
    write_report(&out, &report)?;

    if ctx.json {
        return print_json(&NormalizeSummary {
            entries: report.entries.len(),
            errors: report.errors,
            output: out.display().to_string(),
        });
    }

    println!(
        "Normalized {} entries ({} errors) to {}",
        report.entries.len(),
        report.errors.len(),
        out.display()
    );
    Ok(())
}

fn write_report(path: &Path, report: &NormalizeReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    let data = ingest::to_json_string(report)?;
    fs::write(path, data).with_context(|| format!("write output file {}", path.display()))
}
