//! Marker Cleaner: YAML marker triage CLI

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use marker_cleaner::config::load_config;
use marker_cleaner::progress::{NoProgress, ProgressSink, StderrProgress};
use marker_cleaner::reporter::{ConsoleReporter, JsonReporter, MarkdownReporter, REPORT_FILENAME};
use marker_cleaner::AnalysisEngine;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Marker Cleaner: sorts YAML marker files into maintenance buckets
#[derive(Parser, Debug)]
#[command(name = "marker-cleaner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder containing the marker files (not searched recursively)
    folder: PathBuf,

    /// Write the JSON result to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Path to config file (default: search .markercleanerrc.json in the folder and its parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a Markdown report (default: <FOLDER>/marker-report.md)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    report: Option<Option<PathBuf>>,

    /// Analyze files in parallel
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Quiet mode (no progress events or notices)
    #[arg(long, short)]
    quiet: bool,

    /// Print a colored per-file summary to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let folder_path = args.folder.display().to_string();
    let reporter = JsonReporter::new().pretty();

    let config = match load_config(&args.folder, args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let payload = reporter.report_failure(&format!("{:#}", e), &folder_path);
            write_output(args.output.as_deref(), &payload, true)?;
            return Ok(ExitCode::from(1));
        }
    };

    if !args.quiet {
        for name in config.unknown_checks() {
            eprintln!(
                "{}: Unknown check \"{}\" in config (ignored)",
                "Warning".yellow(),
                name
            );
        }
    }

    let engine = match AnalysisEngine::new().with_config(config) {
        Ok(engine) => engine,
        Err(e) => {
            let payload = reporter.report_failure(&format!("{:#}", e), &folder_path);
            write_output(args.output.as_deref(), &payload, true)?;
            return Ok(ExitCode::from(1));
        }
    };

    // Set up parallel processing
    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }
    let engine = if args.parallel || args.jobs.is_some() {
        engine.parallel()
    } else {
        engine
    };

    let mut progress: Box<dyn ProgressSink> = if args.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(StderrProgress)
    };

    let results = match engine.scan_folder(&args.folder, progress.as_mut()) {
        Ok(results) => results,
        Err(e) => {
            let payload = reporter.report_failure(&e.to_string(), &folder_path);
            write_output(args.output.as_deref(), &payload, true)?;
            return Ok(ExitCode::from(1));
        }
    };

    if results.total == 0 && !args.quiet {
        eprintln!(
            "{}: No marker files found in {}",
            "Info".blue(),
            folder_path
        );
    }

    if args.verbose {
        ConsoleReporter::new().verbose().report(&results);
    }

    let payload = reporter.report_success(&results, &folder_path);
    write_output(args.output.as_deref(), &payload, args.quiet)?;

    if let Some(ref report) = args.report {
        let report_path = report
            .clone()
            .unwrap_or_else(|| args.folder.join(REPORT_FILENAME));
        let markdown = MarkdownReporter::new().report(&results, &folder_path);
        std::fs::write(&report_path, markdown)
            .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
        if !args.quiet {
            eprintln!(
                "{}: Report written to {}",
                "Info".blue(),
                report_path.display()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the JSON payload or write it to `output`
fn write_output(output: Option<&Path>, payload: &str, quiet: bool) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", payload))
                .with_context(|| format!("Failed to write results to {}", path.display()))?;
            if !quiet {
                eprintln!("{}: Results written to {}", "Info".blue(), path.display());
            }
        }
        None => println!("{}", payload),
    }
    Ok(())
}
