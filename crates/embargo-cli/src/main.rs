//! CLI entry point for import-embargo.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, output and
//! exit codes. All business logic lives in the `embargo-app` crate.

use std::io::{IsTerminal, Write};

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use embargo_app::{
    CheckInput, parse_output_format, render_report, run_check, verdict_exit_code, write_report,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "import-embargo",
    version,
    about = "Enforce __embargo__.json import/export boundaries in a Python source tree"
)]
struct Cli {
    /// Files or directories to check, relative to the app root.
    #[arg(value_name = "FILENAMES")]
    filenames: Vec<String>,

    /// Application root that module names are resolved against.
    #[arg(long, default_value = ".")]
    app_root: Utf8PathBuf,

    /// Glob (relative to the app root) of files to skip. Repeatable.
    #[arg(long = "exclude", value_name = "GLOB")]
    excludes: Vec<String>,

    /// Output format (text|json|markdown|github).
    #[arg(long, default_value = "text")]
    format: String,

    /// Also write the JSON report to this path.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Log filter, e.g. `debug` or `embargo_repo=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("import-embargo error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let format = parse_output_format(&cli.format)?;

    let output = run_check(CheckInput {
        app_root: &cli.app_root,
        targets: &cli.filenames,
        excludes: &cli.excludes,
    })?;
    let report = &output.report;

    if let Some(path) = &cli.report_out {
        write_report(path, report).context("write report json")?;
        debug!(path = %path, "wrote report");
    }

    let rendered = render_report(report, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("write output")?;

    Ok(verdict_exit_code(report.verdict))
}
