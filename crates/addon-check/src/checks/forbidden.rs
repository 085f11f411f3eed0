//! Files and extension points addons must not ship.

use addon_manifest::REPOSITORY_POINT;

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Binary, compiled, and OS clutter file suffixes rejected outright.
const FORBIDDEN_SUFFIXES: [&str; 7] = [
    ".so",
    ".dll",
    ".pyo",
    ".exe",
    ".xbt",
    ".xpr",
    "Thumbs.db",
];

/// Errors for every file matching a denylisted suffix.
pub struct ForbiddenFiles;

impl Check for ForbiddenFiles {
    fn name(&self) -> &'static str {
        "forbidden-files"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        for file in &ctx.files {
            let path = file.to_string_lossy();
            if FORBIDDEN_SUFFIXES.iter().any(|s| path.ends_with(s)) {
                report.fail(format!("{path} is not allowed"));
            }
        }
        Ok(())
    }
}

/// Errors when the addon declares the repository-definition capability.
/// Addons must not redistribute the repository mechanism itself.
pub struct ForbiddenExtensionPoint;

impl Check for ForbiddenExtensionPoint {
    fn name(&self) -> &'static str {
        "forbidden-extension-point"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        if ctx.addon.extension_points().contains(&REPOSITORY_POINT) {
            report.fail(format!(
                "the {REPOSITORY_POINT} extension point is not allowed"
            ));
        }
        Ok(())
    }
}
