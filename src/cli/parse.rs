//! CLI parse: clap types for Ghbook. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ghbook CLI - GitHub repository exploration and collaborator management
#[derive(Parser)]
#[command(name = "ghbook", version)]
#[command(about = "Explore GitHub repository trees and manage collaborators")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// GitHub token (overrides config file and environment)
    #[arg(long)]
    pub token: Option<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List repositories visible to the token
    Repos {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Fetch a branch tree and print the filtered directory map
    Contents {
        /// Repository as owner/repo
        #[arg(long)]
        repo: String,
        /// Branch to fetch (default: the repository's default branch)
        #[arg(long)]
        branch: Option<String>,
        /// Restrict output to directories under this base path
        #[arg(long)]
        path: Option<String>,
        /// Comma-separated allowed file extensions (e.g. ".md,.txt")
        #[arg(long)]
        file_types: Option<String>,
        /// Omit subdirectory listings from the output
        #[arg(long)]
        hide_dirs: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Add collaborators to a repository, one request per user
    AddUsers {
        /// Repository as owner/repo
        #[arg(long)]
        repo: String,
        /// Permission level (pull, triage, push, maintain, admin)
        #[arg(long)]
        permission: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Usernames to add
        #[arg(required = true)]
        users: Vec<String>,
    },
}
