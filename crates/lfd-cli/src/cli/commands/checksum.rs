//! `lfd checksum <path>...` – SHA-256 of files.

use anyhow::{Context, Result};
use lfd_core::checksum;
use std::path::PathBuf;

/// Print `<sha256>  <path>` for each file, sha256sum-style.
pub async fn run_checksum(paths: &[PathBuf]) -> Result<()> {
    let paths = paths.to_vec();
    let digests = tokio::task::spawn_blocking(move || {
        paths
            .into_iter()
            .map(|p| checksum::sha256_path(&p).map(|d| (d, p)))
            .collect::<Result<Vec<_>>>()
    })
    .await
    .context("checksum task join")??;
    for (digest, path) in digests {
        println!("{}  {}", digest, path.display());
    }
    Ok(())
}
