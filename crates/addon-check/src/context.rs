//! Read-only context shared by every check.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use addon_manifest::{Manifest, Version};
use addon_policy::Branch;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Everything a check may look at: the addon tree, the parsed manifest,
/// and the parameters of this run. Built once per run, never mutated.
#[derive(Debug)]
pub struct CheckContext {
    /// Root directory of the addon being checked.
    pub addon_path: PathBuf,
    /// Target branch name as given by the caller. May be unsupported;
    /// the branch check reports that.
    pub branch: String,
    /// Addon id the submission claims, when known.
    pub expected_id: Option<String>,
    /// Addon version the submission claims, when known.
    pub expected_version: Option<Version>,
    /// Root of the sibling repositories, when configured. Enables
    /// cross-addon dependency version checks.
    pub repo_root: Option<PathBuf>,
    /// Every regular file under the addon root, sorted.
    pub files: Vec<PathBuf>,
    /// The parsed manifest.
    pub addon: Manifest,
}

impl CheckContext {
    /// Discover the addon tree and parse its manifest.
    ///
    /// Fails when the root directory is inaccessible or the manifest does
    /// not parse; both abort the run before any check executes.
    pub fn new(
        addon_path: &Path,
        branch: &str,
        expected_id: Option<&str>,
        expected_version: Option<Version>,
        repo_root: Option<&Path>,
    ) -> Result<Self> {
        if !addon_path.is_dir() {
            return Err(Error::AddonRootNotFound(addon_path.to_path_buf()));
        }

        let mut files: Vec<PathBuf> = WalkDir::new(addon_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect();
        files.sort();

        let addon = Manifest::load(addon_path)?;

        Ok(Self {
            addon_path: addon_path.to_path_buf(),
            branch: branch.to_string(),
            expected_id: expected_id.map(str::to_string),
            expected_version,
            repo_root: repo_root.map(Path::to_path_buf),
            files,
            addon,
        })
    }

    /// The target branch as a policy value, or `None` when the branch
    /// name is not in the supported list.
    pub fn policy_branch(&self) -> Option<Branch> {
        Branch::from_str(&self.branch).ok()
    }
}
