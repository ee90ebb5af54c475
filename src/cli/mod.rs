//! CLI argument parsing for clusterconf.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Clusterconf: resolve cluster configuration documents and export
/// orchestration options.
///
/// Clusters are declared under `clusters:` in YAML documents. A cluster may
/// extend another with `_inherit`, overriding only the fields it sets.
#[derive(Parser, Debug)]
#[command(name = "clusterconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file, or directory of `*.yaml`/`*.yml` files.
    #[arg(
        short,
        long,
        global = true,
        env = "CLUSTERCONF_CONFIG",
        default_value = "config"
    )]
    pub config: PathBuf,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for clusterconf.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List declared clusters and what they inherit from.
    List,

    /// Print a cluster with its `_inherit` chain applied.
    Show(ShowArgs),

    /// Print the orchestration options exported from a resolved cluster.
    Export(ExportArgs),

    /// Print the API URL of every node, per node group.
    Endpoints(EndpointsArgs),
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Cluster name.
    pub cluster: String,
}

/// Output format for `export`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Cluster name.
    pub cluster: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Arguments for the `endpoints` command.
#[derive(Parser, Debug)]
pub struct EndpointsArgs {
    /// Cluster name.
    pub cluster: String,

    /// Only show this node group.
    #[arg(short, long)]
    pub group: Option<String>,

    /// Use the internal API domain instead of the public one.
    #[arg(long)]
    pub internal: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
