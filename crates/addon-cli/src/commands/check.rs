//! Check command implementation

use std::path::Path;

use colored::Colorize;

use addon_check::AddonCheck;
use addon_manifest::Version;

use crate::config::Config;
use crate::error::{CliError, Result};

/// Run the checker against a local addon directory.
///
/// The sibling repository root comes from `repo_root` when given, falling
/// back to the configured `[git] parent_dir`. Errors in the report make
/// the command fail so scripts can gate on the exit code.
pub fn run_check(
    config: &Config,
    path: &Path,
    branch: &str,
    addon_id: Option<&str>,
    addon_version: Option<&str>,
    repo_root: Option<&Path>,
) -> Result<()> {
    let expected_version = addon_version.map(Version::parse).transpose()?;
    let repo_root = repo_root.or(config.git.parent_dir.as_deref());

    println!(
        "{} Checking {} against {}...",
        "=>".blue().bold(),
        path.display(),
        branch
    );

    let check = AddonCheck::new(path, branch, addon_id, expected_version, repo_root)?;
    let (warnings, errors) = check.run();

    if errors > 0 {
        println!(
            "{} {} warning(s), {} error(s)",
            "FAIL".red().bold(),
            warnings,
            errors
        );
        Err(CliError::user(format!("{errors} error(s) detected")))
    } else {
        println!("{} {} warning(s), no errors", "OK".green().bold(), warnings);
        Ok(())
    }
}
