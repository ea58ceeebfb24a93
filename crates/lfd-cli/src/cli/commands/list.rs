//! `lfd list` – print function names.
//!
//! Stdout carries names only, so the output can be piped; status text goes to stderr.

use anyhow::{Context, Result};
use lfd_core::catalog::AwsCliCatalog;
use lfd_core::config::LfdConfig;
use lfd_core::function::FunctionRef;
use lfd_core::pipeline;

/// One name per line, nothing else.
pub(crate) fn render_names(functions: &[FunctionRef]) -> String {
    functions.iter().map(|f| format!("{f}\n")).collect()
}

pub async fn run_list(cfg: &LfdConfig) -> Result<()> {
    let catalog = AwsCliCatalog::from_config(cfg);
    let functions = tokio::task::spawn_blocking(move || pipeline::list_functions(&catalog, &[]))
        .await
        .context("list task join")??;
    if functions.is_empty() {
        eprintln!("No functions found.");
    }
    print!("{}", render_names(&functions));
    Ok(())
}
