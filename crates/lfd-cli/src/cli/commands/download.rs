//! `lfd download` – list → resolve → fetch → save.

use anyhow::{Context, Result};
use lfd_core::catalog::AwsCliCatalog;
use lfd_core::config::LfdConfig;
use lfd_core::fetch::FetchOptions;
use lfd_core::pipeline::{self, FunctionOutcome, RunOptions, RunReport};
use std::path::PathBuf;

fn print_outcome(o: &FunctionOutcome) {
    match &o.result {
        Ok(bytes) => println!("saved {} ({} bytes)", o.dest.display(), bytes),
        Err(e) => eprintln!("failed {}: {}", o.name, e),
    }
}

/// 0 if every selected function was saved and every `--only` name was listed, 1 otherwise.
pub(crate) fn exit_code(report: &RunReport) -> i32 {
    if report.all_succeeded() {
        0
    } else {
        1
    }
}

/// Returns the process exit code. A failed listing is returned as `Err`.
pub async fn run_download(cfg: &LfdConfig, output_dir: PathBuf, only: Vec<String>) -> Result<i32> {
    let catalog = AwsCliCatalog::from_config(cfg);
    let opts = RunOptions {
        output_dir,
        fetch: FetchOptions::from_config(cfg),
        only,
    };
    tracing::info!(output_dir = %opts.output_dir.display(), "starting download run");

    let report = tokio::task::spawn_blocking(move || pipeline::run(&catalog, &opts, print_outcome))
        .await
        .context("download task join")??;

    for name in &report.unmatched {
        eprintln!("not found {}: no such function in listing", name);
    }
    if report.outcomes.is_empty() && report.unmatched.is_empty() {
        eprintln!("No functions found.");
    }
    if report.failed() > 0 {
        eprintln!(
            "{} of {} function(s) failed",
            report.failed(),
            report.outcomes.len()
        );
    }
    Ok(exit_code(&report))
}
