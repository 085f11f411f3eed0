//! Line-ending policy: no CRLF anywhere but image assets.

use std::path::Path;

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Image asset suffixes exempt from the scan.
const IMAGE_SUFFIXES: [&str; 4] = [".png", ".jpg", ".jpeg", ".tbn"];

/// Errors once per file containing a CRLF line ending. Scanning of a file
/// stops at its first hit.
pub struct LineEndings;

impl Check for LineEndings {
    fn name(&self) -> &'static str {
        "line-endings"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        for file in &ctx.files {
            if is_image_asset(file) {
                continue;
            }
            let content = match std::fs::read(file) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!(file = %file.display(), error = %e, "unreadable, skipping");
                    continue;
                }
            };
            if content.windows(2).any(|pair| pair == b"\r\n") {
                report.fail(format!("invalid end-of-line (CRLF) in {}", file.display()));
            }
        }
        Ok(())
    }
}

fn is_image_asset(file: &Path) -> bool {
    let name = file.to_string_lossy();
    IMAGE_SUFFIXES.iter().any(|s| name.ends_with(s))
}
