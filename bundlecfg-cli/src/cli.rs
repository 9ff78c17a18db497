//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ConfigCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for reading and writing layered settings.
#[derive(Parser)]
#[command(name = "bundlecfg")]
#[command(version, about = "Read and write layered package-manager settings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the per-project settings file
    #[arg(long, value_name = "DIR", global = true)]
    pub app_config: Option<PathBuf>,

    /// Per-user settings file
    #[arg(long, value_name = "FILE", global = true, env = "BUNDLE_USER_CONFIG")]
    pub user_config: Option<PathBuf>,

    /// Write to the per-project file when no scope is given
    #[arg(long, global = true)]
    pub prefer_local: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List, show, set or delete settings
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
