//! addon-pr CLI
//!
//! The command-line interface for validating and integrating addon
//! pull requests.

mod cli;
mod commands;
mod config;
mod error;
mod intake;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to set tracing subscriber");

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Check {
            path,
            branch,
            addon_id,
            addon_version,
            repo_root,
        } => commands::run_check(
            &config,
            &path,
            &branch,
            addon_id.as_deref(),
            addon_version.as_deref(),
            repo_root.as_deref(),
        ),
        Commands::Process(args) => commands::run_process(&config, &args),
        Commands::Clean { branch, addon_type } => {
            commands::run_clean(&config, &branch, &addon_type)
        }
    }
}
