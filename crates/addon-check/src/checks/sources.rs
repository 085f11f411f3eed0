//! Deprecated and forbidden patterns in Python sources.

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Scans every `.py` file line by line, skipping blank and comment lines.
///
/// Deprecated API uses warn per occurrence. A bare print statement warns
/// once per file and stops that file's scan.
pub struct SourcePatterns;

impl Check for SourcePatterns {
    fn name(&self) -> &'static str {
        "source-patterns"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        for file in &ctx.files {
            if file.extension().and_then(|e| e.to_str()) != Some("py") {
                continue;
            }
            let content = match std::fs::read(file) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    tracing::debug!(file = %file.display(), error = %e, "unreadable, skipping");
                    continue;
                }
            };
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if line.contains("os.getcwd") {
                    report.warn(format!("{}: os.getcwd() is deprecated", file.display()));
                }
                if line.contains("xbmc.PLAYER_CORE") {
                    report.warn(format!(
                        "{}: selecting a player core is deprecated",
                        file.display()
                    ));
                }
                if line.to_ascii_lowercase().contains("executehttpapi") {
                    report.warn(format!("{}: the HTTP API is deprecated", file.display()));
                }
                if is_print_statement(line) {
                    report.warn(format!("{}: print statement found", file.display()));
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Whether a (trimmed) line is a bare print statement rather than a word
/// that merely starts with "print".
fn is_print_statement(line: &str) -> bool {
    line.strip_prefix("print").is_some_and(|rest| {
        rest.is_empty()
            || rest
                .chars()
                .next()
                .is_some_and(|c| !c.is_alphanumeric() && c != '_')
    })
}
