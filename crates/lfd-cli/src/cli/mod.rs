//! CLI for LFD, the Lambda function artifact downloader.

mod commands;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use lfd_core::config::{self, LfdConfig};
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_download, run_list, run_man};

/// Top-level CLI for LFD.
#[derive(Debug, Parser)]
#[command(name = "lfd", version)]
#[command(
    about = "LFD: download the deployment package of every Lambda function",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options passed through to the platform CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct AwsArgs {
    /// Named credentials profile (overrides config).
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Region to list functions in (overrides config).
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,
}

impl AwsArgs {
    /// Command-line values win over config values.
    pub fn apply(&self, cfg: &mut LfdConfig) {
        if let Some(p) = &self.profile {
            cfg.profile = Some(p.clone());
        }
        if let Some(r) = &self.region {
            cfg.region = Some(r.clone());
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List all functions and save each deployment package as `<name>.zip`.
    Download {
        #[command(flatten)]
        aws: AwsArgs,

        /// Directory to write artifacts to (default: config `output_dir`, else current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Only download this function (repeatable).
        #[arg(long = "only", value_name = "NAME")]
        only: Vec<String>,
    },

    /// Print function names, one per line, in listing order.
    List {
        #[command(flatten)]
        aws: AwsArgs,
    },

    /// Compute SHA-256 of files (e.g. to compare artifacts between runs).
    Checksum {
        /// Files to hash.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    /// Parse arguments, run the command and return the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Download {
                aws,
                output_dir,
                only,
            } => {
                let cfg = load_config(&aws)?;
                let output_dir = match output_dir.or_else(|| cfg.output_dir.clone()) {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                run_download(&cfg, output_dir, only).await
            }
            CliCommand::List { aws } => {
                let cfg = load_config(&aws)?;
                run_list(&cfg).await?;
                Ok(0)
            }
            CliCommand::Checksum { paths } => {
                run_checksum(&paths).await?;
                Ok(0)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell, &mut Cli::command())?;
                Ok(0)
            }
            CliCommand::Man => {
                run_man(Cli::command())?;
                Ok(0)
            }
        }
    }
}

fn load_config(aws: &AwsArgs) -> Result<LfdConfig> {
    let mut cfg = config::load_or_init()?;
    aws.apply(&mut cfg);
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
