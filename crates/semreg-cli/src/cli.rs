//! CLI argument definitions for semreg.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "semreg",
    version,
    about = "Resolve contract implementation addresses by semantic version",
    long_about = "semreg reads a registry of deployed contract implementations, merges \
                  network-specific deployments over the global set, and picks the \
                  implementation of every contract role that satisfies its target version."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the registry document (defaults to the nearest semreg.toml)
    #[arg(short, long, global = true)]
    pub registry: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the registry document
    Check,

    /// Resolve the implementation of every contract role
    Resolve {
        /// Network whose deployments override the global set
        #[arg(short, long)]
        network: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the deployed versions of one contract role
    Versions {
        /// Role key or contract name (e.g. optimism_portal, OptimismPortal)
        role: String,
        /// Network whose deployments override the global set
        #[arg(short, long)]
        network: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}
