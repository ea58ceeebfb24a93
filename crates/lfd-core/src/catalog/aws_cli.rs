//! [`FunctionCatalog`] backed by the platform CLI (`aws lambda ...`).
//!
//! Credentials, profile resolution and request signing are left to the CLI.

use std::process::Command;

use super::parse::{parse_code_location, parse_function_names};
use super::{CatalogError, FunctionCatalog};
use crate::config::LfdConfig;
use crate::function::{DownloadLocation, FunctionRef};

/// Runs `aws lambda list-functions` / `aws lambda get-function` and parses the JSON output.
#[derive(Debug, Clone)]
pub struct AwsCliCatalog {
    program: String,
    profile: Option<String>,
    region: Option<String>,
}

impl AwsCliCatalog {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            profile: None,
            region: None,
        }
    }

    pub fn from_config(cfg: &LfdConfig) -> Self {
        Self {
            program: cfg.aws_cli.clone(),
            profile: cfg.profile.clone(),
            region: cfg.region.clone(),
        }
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    fn global_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(p) = &self.profile {
            args.push("--profile".to_string());
            args.push(p.clone());
        }
        if let Some(r) = &self.region {
            args.push("--region".to_string());
            args.push(r.clone());
        }
        args
    }

    pub(crate) fn list_args(&self) -> Vec<String> {
        let mut args: Vec<String> = [
            "lambda",
            "list-functions",
            "--query",
            "Functions[].FunctionName",
            "--output",
            "json",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        args.extend(self.global_args());
        args
    }

    pub(crate) fn get_function_args(&self, name: &str) -> Vec<String> {
        let mut args: Vec<String> = [
            "lambda",
            "get-function",
            "--function-name",
            name,
            "--query",
            "Code.Location",
            "--output",
            "json",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        args.extend(self.global_args());
        args
    }

    /// Run the CLI with `args`; returns stdout on success.
    fn run(&self, operation: &str, args: &[String]) -> Result<String, CatalogError> {
        tracing::debug!(program = %self.program, operation, "running platform CLI");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| CatalogError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CatalogError::Command {
                operation: operation.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| CatalogError::Parse {
            operation: operation.to_string(),
            reason: e.to_string(),
        })
    }
}

impl FunctionCatalog for AwsCliCatalog {
    fn list_functions(&self) -> Result<Vec<FunctionRef>, CatalogError> {
        let stdout = self.run("lambda list-functions", &self.list_args())?;
        let names = parse_function_names(&stdout)?;
        tracing::info!(count = names.len(), "listed functions");
        Ok(names.into_iter().map(FunctionRef::new).collect())
    }

    fn code_location(&self, function: &FunctionRef) -> Result<DownloadLocation, CatalogError> {
        let stdout = self.run(
            "lambda get-function",
            &self.get_function_args(function.name()),
        )?;
        parse_code_location(&stdout)?
            .map(DownloadLocation::new)
            .ok_or_else(|| CatalogError::NoLocation(function.name().to_string()))
    }
}
