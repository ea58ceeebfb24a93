//! List → resolve → fetch → save.
//!
//! Functions are processed one at a time in listing order. A failure for one
//! function is recorded and the run moves on to the next; only a failed
//! listing aborts the run.

mod report;

pub use report::{FunctionOutcome, RunReport};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::catalog::FunctionCatalog;
use crate::fetch::{self, FetchOptions};
use crate::function::FunctionRef;
use crate::storage;

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output_dir: PathBuf,
    pub fetch: FetchOptions,
    /// If non-empty, only functions with these names are processed.
    pub only: Vec<String>,
}

impl RunOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            fetch: FetchOptions::default(),
            only: Vec::new(),
        }
    }
}

/// List functions, keeping listing order and applying the `only` filter.
pub fn list_functions<C: FunctionCatalog>(catalog: &C, only: &[String]) -> Result<Vec<FunctionRef>> {
    let listed = catalog
        .list_functions()
        .context("listing functions failed")?;
    if only.is_empty() {
        return Ok(listed);
    }
    let wanted: HashSet<&str> = only.iter().map(String::as_str).collect();
    Ok(listed
        .into_iter()
        .filter(|f| wanted.contains(f.name()))
        .collect())
}

/// Names from `only` that are absent from `functions`, in the order given.
pub fn unmatched_names(functions: &[FunctionRef], only: &[String]) -> Vec<String> {
    let listed: HashSet<&str> = functions.iter().map(FunctionRef::name).collect();
    let mut missing: Vec<String> = Vec::new();
    for name in only {
        if !listed.contains(name.as_str()) && !missing.contains(name) {
            missing.push(name.clone());
        }
    }
    missing
}

/// Download every listed function's deployment package into `opts.output_dir`.
///
/// `on_outcome` is called after each function, in order.
pub fn run<C, F>(catalog: &C, opts: &RunOptions, mut on_outcome: F) -> Result<RunReport>
where
    C: FunctionCatalog,
    F: FnMut(&FunctionOutcome),
{
    let functions = list_functions(catalog, &opts.only)?;
    let unmatched = unmatched_names(&functions, &opts.only);
    for name in &unmatched {
        tracing::warn!(function = %name, "requested function not in listing");
    }
    let mut report = RunReport {
        outcomes: Vec::with_capacity(functions.len()),
        unmatched,
    };
    if functions.is_empty() {
        tracing::info!("no functions to download");
        return Ok(report);
    }

    for function in &functions {
        let outcome = process_one(catalog, function, opts);
        match &outcome.result {
            Ok(bytes) => tracing::info!(
                function = %function,
                dest = %outcome.dest.display(),
                bytes,
                "saved artifact"
            ),
            Err(e) => tracing::warn!(function = %function, "download failed: {}", e),
        }
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        bytes = report.bytes_written(),
        "run finished"
    );
    Ok(report)
}

fn process_one<C: FunctionCatalog>(
    catalog: &C,
    function: &FunctionRef,
    opts: &RunOptions,
) -> FunctionOutcome {
    let dest = storage::artifact_path(&opts.output_dir, function);
    let result = catalog
        .code_location(function)
        .map_err(|e| e.to_string())
        .and_then(|location| {
            fetch::fetch_to_path(&location, &dest, &opts.fetch).map_err(|e| e.to_string())
        });
    FunctionOutcome {
        name: function.name().to_string(),
        dest,
        result,
    }
}
