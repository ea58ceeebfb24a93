//! Function catalog: the platform's list-functions and get-function operations.
//!
//! The pipeline only depends on the [`FunctionCatalog`] trait; the default
//! implementation drives the platform CLI with ambient credentials.

mod aws_cli;
mod parse;

pub use aws_cli::AwsCliCatalog;
pub use parse::{parse_code_location, parse_function_names, strip_quotes};

use crate::function::{DownloadLocation, FunctionRef};

/// Errors from listing functions or resolving a function's code location.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{operation}` exited with {status}: {stderr}")]
    Command {
        operation: String,
        status: String,
        stderr: String,
    },

    #[error("unexpected `{operation}` output: {reason}")]
    Parse { operation: String, reason: String },

    #[error("function {0} has no downloadable code location")]
    NoLocation(String),
}

/// Source of function names and their deployment package URLs.
pub trait FunctionCatalog {
    /// All function names, in listing order.
    fn list_functions(&self) -> Result<Vec<FunctionRef>, CatalogError>;

    /// Presigned URL of the function's deployment package.
    fn code_location(&self, function: &FunctionRef) -> Result<DownloadLocation, CatalogError>;
}
