//! Identity and version agreement between the submission and the manifest.

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Errors when the submission's claimed id or version disagrees with the
/// manifest, and when the mandatory `language` metadata tag is absent.
pub struct IdentityMatch;

impl Check for IdentityMatch {
    fn name(&self) -> &'static str {
        "addon-xml"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        if let Some(expected) = &ctx.expected_id {
            if *expected != ctx.addon.id {
                report.fail(format!(
                    "given addon id '{}' does not match manifest id '{}'",
                    expected, ctx.addon.id
                ));
            }
        }
        if let Some(expected) = &ctx.expected_version {
            if *expected != ctx.addon.version {
                report.fail(format!(
                    "given addon version '{}' does not match manifest version '{}'",
                    expected, ctx.addon.version
                ));
            }
        }
        if !ctx.addon.metadata.contains_key("language") {
            report.fail("missing language tag");
        }
        Ok(())
    }
}
