//! Completeness of the optional descriptive metadata.

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Metadata tags every addon should carry. Their absence is advisory only.
const RECOMMENDED_FIELDS: [&str; 5] = ["license", "forum", "website", "source", "email"];

/// Warns once per missing recommended metadata tag.
pub struct RecommendedMetadata;

impl Check for RecommendedMetadata {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        for field in RECOMMENDED_FIELDS {
            if !ctx.addon.metadata.contains_key(field) {
                report.warn(format!("missing {field} metadata tag"));
            }
        }
        Ok(())
    }
}
