//! Subprocess execution for version-control commands.
//!
//! Every invocation takes an explicit working directory so callers never
//! mutate the process-wide current directory between commands.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Run an external command in `cwd` and return its trimmed stdout.
///
/// A non-zero exit status is [`Error::CommandFailed`] carrying the exit
/// code and captured stderr.
pub fn run(program: &str, args: &[&str], cwd: &Path) -> Result<String> {
    tracing::debug!(program, ?args, cwd = %cwd.display(), "running command");
    let output = Command::new(program).args(args).current_dir(cwd).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);
        Err(Error::CommandFailed { code, stderr })
    }
}

/// Force-checkout a branch in the given repository directory.
pub fn git_checkout(repo_dir: &Path, branch: &str) -> Result<()> {
    run("git", &["checkout", "-qf", branch], repo_dir)?;
    Ok(())
}
