//! Clean command implementation: prune long-broken addons.

use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

use colored::Colorize;

use addon_manifest::{AddonType, Manifest};
use addon_policy::Branch;

use crate::config::Config;
use crate::error::{CliError, Result};

/// Broken addons are kept for this long before removal.
const BROKEN_GRACE_DAYS: u64 = 182;

/// Remove addons that have been marked broken for more than six months
/// from the per-type repository of the given branch, committing each
/// removal.
pub fn run_clean(config: &Config, branch: &str, addon_type: &str) -> Result<()> {
    let branch = Branch::from_str(branch)?;
    let addon_type = AddonType::from_str(addon_type)?;
    let parent_dir = config
        .git
        .parent_dir
        .as_deref()
        .ok_or_else(|| CliError::user("git parent_dir is not configured"))?;
    let repo = parent_dir.join(addon_type.directory());

    addon_command::git_checkout(&repo, branch.as_str())?;
    let cutoff = SystemTime::now() - Duration::from_secs(BROKEN_GRACE_DAYS * 24 * 60 * 60);

    for entry in std::fs::read_dir(&repo)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !entry.file_type()?.is_dir() {
            continue;
        }
        let manifest = match Manifest::load(&entry.path()) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::debug!(addon = %name, error = %e, "unreadable manifest, skipping");
                continue;
            }
        };
        if !manifest.is_broken() {
            continue;
        }
        tracing::debug!(addon = %manifest.id, "addon is broken");
        if last_commit_time(&repo, &name)? < cutoff {
            let message = format!("[{}] removed (broken for more than 6 months)", manifest.id);
            addon_command::run("git", &["rm", "-rfq", &name], &repo)?;
            addon_command::run("git", &["commit", "-qm", &message], &repo)?;
            println!("{} {}", "OK".green().bold(), message);
        }
    }
    Ok(())
}

/// Commit time of the last change touching `name`, from git.
fn last_commit_time(repo: &Path, name: &str) -> Result<SystemTime> {
    let stamp = addon_command::run("git", &["log", "-1", "--format=%ct", "--", name], repo)?;
    let seconds: u64 = stamp
        .parse()
        .map_err(|_| CliError::user(format!("unexpected git log output: '{stamp}'")))?;
    Ok(SystemTime::UNIX_EPOCH + Duration::from_secs(seconds))
}
