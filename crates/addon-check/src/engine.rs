//! The checker entry point.

use std::path::Path;

use addon_manifest::{Manifest, Version};

use crate::checks::builtin_checks;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Runs every registered check against one addon directory.
///
/// Construction is the fatal boundary: an inaccessible addon root or an
/// unparseable manifest fails [`AddonCheck::new`] before any check runs,
/// which callers must distinguish from a clean `(0, 0)` result. Once
/// constructed, [`run`](AddonCheck::run) always completes and returns the
/// accumulated `(warnings, errors)`.
#[derive(Debug)]
pub struct AddonCheck {
    context: CheckContext,
}

impl AddonCheck {
    /// Inspect the addon tree and parse its manifest.
    pub fn new(
        addon_path: &Path,
        branch: &str,
        expected_id: Option<&str>,
        expected_version: Option<Version>,
        repo_root: Option<&Path>,
    ) -> Result<Self> {
        let context =
            CheckContext::new(addon_path, branch, expected_id, expected_version, repo_root)?;
        Ok(Self { context })
    }

    /// The parsed manifest, available to callers after the run.
    pub fn addon(&self) -> &Manifest {
        &self.context.addon
    }

    /// Execute every registered check and return `(warnings, errors)`.
    ///
    /// A check that fails internally is logged and skipped; it never
    /// prevents the remaining checks from running.
    pub fn run(&self) -> (u32, u32) {
        let mut report = Report::new();
        for check in builtin_checks() {
            tracing::debug!(check = check.name(), "running check");
            if let Err(e) = check.run(&self.context, &mut report) {
                tracing::error!(check = check.name(), error = %e, "check did not complete");
            }
        }
        report.counts()
    }
}
