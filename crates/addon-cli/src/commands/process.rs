//! Process command implementation: the intake pipeline.
//!
//! Each pull request is materialized into a staging directory, validated
//! by the checker, and staged into the branch of the matching per-type
//! repository. A failing request aborts that request only; the remaining
//! requests still run.

use std::path::Path;
use std::str::FromStr;

use colored::Colorize;
use dialoguer::Confirm;

use addon_check::AddonCheck;
use addon_command::PullKind;
use addon_manifest::Version;
use addon_policy::Branch;

use crate::cli::ProcessArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::intake::{self, PullRequest};

/// Run the process command.
pub fn run_process(config: &Config, args: &ProcessArgs) -> Result<()> {
    let requests = gather_requests(args)?;
    if requests.is_empty() {
        return Err(CliError::user("no pull requests to process"));
    }

    let staging = tempfile::tempdir()?;
    for request in requests {
        if args.interactive && !confirm(&request)? {
            continue;
        }
        if let Err(e) = process_one(config, &request, staging.path(), args.force) {
            tracing::error!(addon = %request.addon_id, error = %e, "aborting this pull request");
        }
    }
    Ok(())
}

fn confirm(request: &PullRequest) -> Result<bool> {
    let prompt = format!(
        "Process {} ({}) pull request for {}?",
        request.addon_id, request.addon_version, request.branch
    );
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Collect the requests from the message file or the direct flags.
fn gather_requests(args: &ProcessArgs) -> Result<Vec<PullRequest>> {
    if let Some(file) = &args.file {
        let message = std::fs::read_to_string(file)?;
        let subject = message.lines().next().unwrap_or_default().to_string();
        return Ok(intake::parse_message(&subject, &message));
    }

    let required = |value: &Option<String>, flag: &str| {
        value
            .clone()
            .ok_or_else(|| CliError::user(format!("--{flag} is required without --file")))
    };
    let branch = Branch::from_str(&required(&args.branch, "branch")?)?;
    let pull_type = PullKind::from_str(&required(&args.pull_type, "pull-type")?)?;
    Ok(vec![PullRequest {
        addon_id: required(&args.addon_id, "addon-id")?,
        addon_version: required(&args.addon_version, "addon-version")?,
        url: required(&args.url, "url")?,
        revision: args.revision.clone(),
        branch,
        pull_type,
    }])
}

/// Pull, check, and stage one request.
fn process_one(
    config: &Config,
    request: &PullRequest,
    staging_dir: &Path,
    force: bool,
) -> Result<()> {
    tracing::info!(
        addon = %request.addon_id,
        version = %request.addon_version,
        branch = %request.branch,
        "processing pull request"
    );

    addon_command::pull(
        request.pull_type,
        &request.addon_id,
        &request.url,
        request.revision.as_deref(),
        staging_dir,
    )?;
    let addon_dir = staging_dir.join(&request.addon_id);

    let parent_dir = config
        .git
        .parent_dir
        .as_deref()
        .ok_or_else(|| CliError::user("git parent_dir is not configured"))?;

    let expected_version = Version::parse(&request.addon_version)?;
    let check = AddonCheck::new(
        &addon_dir,
        request.branch.as_str(),
        Some(&request.addon_id),
        Some(expected_version),
        Some(parent_dir),
    )?;
    let (warnings, errors) = check.run();
    tracing::info!(warnings, errors, "check finished");

    if errors > 0 {
        if force {
            tracing::warn!("error(s) detected, processing anyway (--force)");
        } else {
            let _ = std::fs::remove_dir_all(&addon_dir);
            return Err(CliError::user(format!("{errors} error(s) detected")));
        }
    }

    let addon = check.addon();
    let target_repo = parent_dir.join(addon.addon_type.directory());
    addon_command::git_checkout(&target_repo, request.branch.as_str())?;

    let target = target_repo.join(&request.addon_id);
    let message = if target.is_dir() {
        addon_command::run("git", &["rm", "-rfq", &request.addon_id], &target_repo)?;
        // Files matched by .gitignore survive git rm.
        let _ = std::fs::remove_dir_all(&target);
        if addon.is_broken() {
            format!("[{}] marked as broken", request.addon_id)
        } else {
            format!(
                "[{}] updated to version {}",
                request.addon_id, request.addon_version
            )
        }
    } else {
        format!(
            "[{}] initial version ({}) thanks to {}",
            request.addon_id, request.addon_version, addon.provider
        )
    };

    move_dir(&addon_dir, &target)?;
    addon_command::run("git", &["add", &request.addon_id], &target_repo)?;
    addon_command::run("git", &["commit", "-qm", &message], &target_repo)?;

    println!("{} {}", "OK".green().bold(), message);
    Ok(())
}

/// Move a directory, falling back to copy-and-remove across filesystems.
fn move_dir(from: &Path, to: &Path) -> Result<()> {
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }
    copy_dir(from, to)?;
    std::fs::remove_dir_all(from)?;
    Ok(())
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let dest = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &dest)?;
        } else {
            std::fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
