//! Target branch validity and structural version rules.

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Errors when the target branch is not in the supported branch list.
pub struct BranchSupported;

impl Check for BranchSupported {
    fn name(&self) -> &'static str {
        "branch"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        if ctx.policy_branch().is_none() {
            report.fail(format!("unsupported branch '{}'", ctx.branch));
        }
        Ok(())
    }
}

/// Errors when the branch mandates three-component versions and the
/// manifest declares only two.
pub struct VersionShape;

impl Check for VersionShape {
    fn name(&self) -> &'static str {
        "version-shape"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        if let Some(branch) = ctx.policy_branch() {
            if branch.requires_patch_version() && !ctx.addon.version.has_patch() {
                report.fail(format!(
                    "invalid {} version number '{}' (three components required)",
                    branch, ctx.addon.version
                ));
            }
        }
        Ok(())
    }
}
