//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::document::DocumentFormat;

/// Subflow - Extract standalone sub-workflows from workflow documents.
#[derive(Debug, Parser)]
#[command(name = "subflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides .subflow.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the sub-workflow needed by one or more targets
    Extract(ExtractArgs),

    /// List inputs, outputs and steps usable as targets
    Targets(TargetsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `extract` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExtractArgs {
    /// Workflow document (YAML or JSON)
    pub workflow: PathBuf,

    /// Target ids or names (comma-separated or repeated)
    #[arg(short, long = "target", required = true, value_delimiter = ',')]
    pub targets: Vec<String>,

    /// Output format (yaml or json)
    #[arg(short, long, env = "SUBFLOW_FORMAT")]
    pub format: Option<DocumentFormat>,

    /// Write the extracted workflow to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `targets` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TargetsArgs {
    /// Workflow document (YAML or JSON)
    pub workflow: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
