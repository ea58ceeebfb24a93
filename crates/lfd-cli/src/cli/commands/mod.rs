//! CLI command handlers, one file per command.

mod checksum;
mod completions;
mod download;
mod list;
mod man;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use download::run_download;
#[cfg(test)]
pub(crate) use download::exit_code;
#[cfg(test)]
pub(crate) use list::render_names;
pub use list::run_list;
pub use man::run_man;
