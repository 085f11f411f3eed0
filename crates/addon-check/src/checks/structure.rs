//! Mandatory and recommended files at the addon root.

use addon_manifest::MANIFEST_FILENAME;

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

const MANDATORY_FILES: [&str; 2] = [MANIFEST_FILENAME, "LICENSE.txt"];
const RECOMMENDED_FILES: [&str; 1] = ["changelog.txt"];

/// Errors per missing mandatory file, warns per missing recommended file.
pub struct MandatoryFiles;

impl Check for MandatoryFiles {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        for name in MANDATORY_FILES {
            if !ctx.addon_path.join(name).is_file() {
                report.fail(format!("missing {name} file"));
            }
        }
        for name in RECOMMENDED_FILES {
            if !ctx.addon_path.join(name).is_file() {
                report.warn(format!("missing recommended {name} file"));
            }
        }
        Ok(())
    }
}
