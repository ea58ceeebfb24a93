//! Artifact file lifecycle.
//!
//! Bytes go to `<dest>.part`; a completed download is synced and renamed
//! onto the final name, a failed one is removed.

mod writer;

pub use writer::ArtifactWriter;

use std::path::{Path, PathBuf};

use crate::function::FunctionRef;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `fn.zip` → `fn.zip.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// `<output_dir>/<function-name>.zip`.
pub fn artifact_path(output_dir: &Path, function: &FunctionRef) -> PathBuf {
    output_dir.join(function.artifact_file_name())
}
