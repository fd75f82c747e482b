//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// Check node-tree documents against their validation rules.
#[derive(Parser, Debug)]
#[command(name = "formgate", version, about, long_about = None, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a document and report whether it would be submitted
    Check(CheckArgs),

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Node-tree document (JSON array, or object with a `nodes` array)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Submit without enforcing the verdict
    #[arg(long)]
    pub no_validate: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Settings file (defaults to `formgate.toml` in the working directory)
    #[arg(short, long, env = "FORMGATE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
