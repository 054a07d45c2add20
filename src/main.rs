//! CLI entry point for the grades processor.
//!
//! Reads a CSV of student scores, writes per-student results and a class
//! summary, and exits non-zero on any failure.

use anyhow::{Context, Result};
use clap::Parser;
use grades_processor::config::{DEFAULT_RESULTS_PATH, DEFAULT_SUMMARY_PATH, PipelineOptions};
use grades_processor::output::summary_json;
use grades_processor::pipeline;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grades_processor", version)]
#[command(about = "Grade students from a CSV of subject scores", long_about = None)]
struct Cli {
    /// CSV with a header row: name column first, then one column per subject
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write per-student averages and pass/fail status
    #[arg(short, long, default_value = DEFAULT_RESULTS_PATH)]
    output: PathBuf,

    /// Where to write the class summary report
    #[arg(short, long, default_value = DEFAULT_SUMMARY_PATH)]
    summary: PathBuf,

    /// Also print the summary as JSON on stdout
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let _file_guard = init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Grading run failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = PipelineOptions {
        results_path: cli.output.clone(),
        summary_path: cli.summary.clone(),
        ..PipelineOptions::default()
    };

    let summary = pipeline::run(&cli.input, &options)
        .with_context(|| format!("could not process '{}'", cli.input.display()))?;

    if cli.json {
        println!("{}", summary_json(&summary)?);
    }

    println!(
        "Processing complete. Output saved to '{}' and '{}'.",
        options.results_path.display(),
        options.summary_path.display()
    );
    Ok(())
}

/// Logging setup: stderr for humans, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set. The returned guard must outlive all logging.
fn init_logging() -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        );

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_path = Path::new(&log_file_path);
            let log_dir = log_path.parent().unwrap_or(Path::new("logs"));
            let log_file_name = log_path
                .file_name()
                .unwrap_or(OsStr::new("grades_processor.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::try_from_env("RUST_LOG_JSON")
                        .unwrap_or_else(|_| EnvFilter::new("debug")),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}
