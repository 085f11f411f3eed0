//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// addon-pr - validate and integrate addon pull requests
#[derive(Parser, Debug)]
#[command(name = "addon-pr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file (default: ~/.addon-pr.toml)
    #[arg(short, long, global = true, env = "ADDON_PR_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a local addon directory
    ///
    /// Runs every validation check and prints the warning and error
    /// counts. Exits non-zero when errors are found.
    Check {
        /// Path to the addon directory
        path: PathBuf,

        /// Target platform branch (eden, frodo, gotham)
        #[arg(short, long)]
        branch: String,

        /// Addon id the submission claims
        #[arg(long)]
        addon_id: Option<String>,

        /// Addon version the submission claims
        #[arg(long)]
        addon_version: Option<String>,

        /// Root of the sibling addon repositories (overrides the config)
        #[arg(long)]
        repo_root: Option<PathBuf>,
    },

    /// Process pull requests: pull, check, and commit each addon
    ///
    /// Requests come from a submission message file or from the direct
    /// flags (--addon-id, --addon-version, --url, --branch, --pull-type).
    Process(ProcessArgs),

    /// Remove addons that have been broken for more than six months
    Clean {
        /// Target platform branch (eden, frodo, gotham)
        #[arg(short, long)]
        branch: String,

        /// Addon type whose repository to clean (plugin, script, ...)
        #[arg(short = 't', long)]
        addon_type: String,
    },
}

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Submission message file to parse
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Addon id (direct mode)
    #[arg(long)]
    pub addon_id: Option<String>,

    /// Addon version (direct mode)
    #[arg(long)]
    pub addon_version: Option<String>,

    /// Source URL (direct mode)
    #[arg(long)]
    pub url: Option<String>,

    /// Revision or tag to pull (direct mode)
    #[arg(long)]
    pub revision: Option<String>,

    /// Target platform branch (direct mode)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Pull mechanism: git, svn, hg, or zip (direct mode)
    #[arg(short = 't', long)]
    pub pull_type: Option<String>,

    /// Ask for confirmation before each request
    #[arg(short, long)]
    pub interactive: bool,

    /// Process requests even when errors are detected
    #[arg(long)]
    pub force: bool,
}
