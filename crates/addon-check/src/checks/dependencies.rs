//! Dependency version policy.

use std::path::Path;

use addon_manifest::{AddonType, Manifest, Version};

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Validates every pinned dependency.
///
/// Platform-mandatory dependencies must pin the exact version the target
/// branch mandates. Other pinned dependencies are resolved against the
/// sibling repositories when a root is configured, and must not demand a
/// version newer than the one currently published there. Unpinned and
/// unresolvable dependencies are skipped with a diagnostic only.
pub struct DependencyVersions;

impl Check for DependencyVersions {
    fn name(&self) -> &'static str {
        "dependencies"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        for dep in &ctx.addon.dependencies {
            let Some(pinned) = dep.version.as_deref() else {
                tracing::debug!(dependency = %dep.id, "unpinned dependency, skipping");
                continue;
            };

            if let Some(required) = ctx
                .policy_branch()
                .and_then(|b| b.mandatory_dependency(&dep.id))
            {
                if pinned != required {
                    report.fail(format!(
                        "invalid {} version '{pinned}' (expected {required} on {})",
                        dep.id, ctx.branch
                    ));
                }
                continue;
            }

            let Some(root) = ctx.repo_root.as_deref() else {
                tracing::debug!(dependency = %dep.id, "no sibling repository configured, skipping");
                continue;
            };
            let Some(available) = sibling_version(root, &ctx.branch, &dep.id) else {
                tracing::debug!(dependency = %dep.id, "not found in sibling repositories, skipping");
                continue;
            };
            match Version::parse(pinned) {
                Ok(required) => {
                    if required > available {
                        report.fail(format!(
                            "{} requires {} {pinned} but the {} repository has {available}",
                            ctx.addon.id, dep.id, ctx.branch
                        ));
                    }
                }
                Err(_) => {
                    tracing::debug!(
                        dependency = %dep.id,
                        version = pinned,
                        "unparseable pinned version, skipping"
                    );
                }
            }
        }
        Ok(())
    }
}

/// Current version of `addon_id` in the plugin then script sibling
/// repositories, each checked out to `branch` first.
///
/// Every failure along the way (missing repository, failed checkout,
/// unreadable sibling manifest) is a skippable condition, not an error.
fn sibling_version(root: &Path, branch: &str, addon_id: &str) -> Option<Version> {
    for dir_name in [AddonType::Plugin.directory(), AddonType::Script.directory()] {
        let repo_dir = root.join(dir_name);
        if !repo_dir.is_dir() {
            continue;
        }
        if let Err(e) = addon_command::git_checkout(&repo_dir, branch) {
            tracing::debug!(
                repository = %repo_dir.display(),
                error = %e,
                "checkout failed, skipping sibling repository"
            );
            continue;
        }
        match Manifest::load(&repo_dir.join(addon_id)) {
            Ok(manifest) => return Some(manifest.version),
            Err(addon_manifest::Error::ManifestNotFound(_)) => {}
            Err(e) => {
                tracing::debug!(
                    dependency = addon_id,
                    error = %e,
                    "unreadable sibling manifest, skipping"
                );
            }
        }
    }
    None
}
