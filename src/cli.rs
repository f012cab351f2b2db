//! Command-line host: extract text, run the checks, print the report.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config;
use crate::extraction::{AutoTextSource, ExtractionError, TextSource};
use crate::models::{FinalResult, Report};
use crate::pipeline::{check_manuscript, DEFAULT_TITLE};
use crate::render::{JsonRenderer, ReportRenderer, TextRenderer};

/// Exit status when extraction or the checks themselves error.
pub const EXIT_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "nhanes-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Screen NHANES-based manuscripts for common red flags", long_about = None)]
pub struct Cli {
    /// Manuscript file (PDF, DOCX or plain text)
    pub file: PathBuf,

    /// Title shown in the report (default: file name without extension)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Report output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Logs go to stderr; stdout carries only the report.
pub fn init_tracing(verbose: bool, json: bool) {
    let default_filter = if verbose {
        config::verbose_log_filter()
    } else {
        config::default_log_filter()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

pub fn exit_code(report: &Report) -> i32 {
    match report.final_result {
        FinalResult::Pass | FinalResult::NotNhanes => 0,
        FinalResult::Fail => 1,
        FinalResult::Error => EXIT_ERROR,
    }
}

/// Report title: explicit `--title`, else the file stem.
pub fn resolve_title(explicit: Option<&str>, file: &Path) -> String {
    if let Some(title) = explicit {
        return title.to_string();
    }
    file.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Run one invocation against `source`, writing the rendered report to `out`.
pub fn execute(
    cli: &Cli,
    source: &dyn TextSource,
    out: &mut dyn Write,
) -> Result<i32, CliError> {
    let title = resolve_title(cli.title.as_deref(), &cli.file);

    let text = source.extract_text(&cli.file, &mut |done, total| {
        tracing::debug!(done, total, "Extraction progress");
    })?;

    let report = check_manuscript(&text, Some(&title));

    let rendered = match cli.format {
        OutputFormat::Text => TextRenderer.render(&report),
        OutputFormat::Json => JsonRenderer.render(&report),
    };
    writeln!(out, "{rendered}")?;

    Ok(exit_code(&report))
}

/// Binary entry point. Returns the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match execute(&cli, &AutoTextSource, &mut out) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, file = %cli.file.display(), "nhanes-check failed");
            eprintln!("error: {e}");
            EXIT_ERROR
        }
    }
}
