//! Localization string identifier range policy.

use std::path::Path;
use std::sync::LazyLock;

use addon_policy::{string_id_range, GLOBAL_STRING_ID_RANGE};
use regex::Regex;

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

static MSGCTXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"msgctxt\s+"#(\d+)""##).expect("static regex"));

/// Validates the numeric identifiers in localization resource files.
///
/// Two formats are recognized by extension: `strings.xml` string tables
/// and `strings.po` message catalogs. Identifiers outside the global range
/// are errors; identifiers merely outside the range reserved for this
/// addon's type are warnings. A global-range violation is not re-flagged
/// against the narrower type range.
pub struct StringIds;

impl Check for StringIds {
    fn name(&self) -> &'static str {
        "string-ids"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        let type_range = string_id_range(ctx.addon.addon_type);

        for file in &ctx.files {
            if file.file_stem().and_then(|s| s.to_str()) != Some("strings") {
                continue;
            }
            let ids = match file.extension().and_then(|e| e.to_str()) {
                Some("xml") => string_table_ids(file),
                Some("po") => message_catalog_ids(file),
                _ => {
                    tracing::debug!(file = %file.display(), "unrecognized language resource format");
                    continue;
                }
            };

            for id in ids {
                if !GLOBAL_STRING_ID_RANGE.contains(id) {
                    report.fail(format!(
                        "{}: string id {id} outside the valid range {GLOBAL_STRING_ID_RANGE}",
                        file.display()
                    ));
                } else if let Some(range) = type_range {
                    if !range.contains(id) {
                        report.warn(format!(
                            "{}: string id {id} outside the {} range {range}",
                            file.display(),
                            ctx.addon.addon_type
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Identifiers from a `strings.xml` string table.
fn string_table_ids(file: &Path) -> Vec<u32> {
    let content = match std::fs::read(file) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::debug!(file = %file.display(), error = %e, "unreadable, skipping");
            return Vec::new();
        }
    };
    let doc = match roxmltree::Document::parse(&content) {
        Ok(doc) => doc,
        Err(e) => {
            // The XML well-formedness check reports the parse failure.
            tracing::debug!(file = %file.display(), error = %e, "unparseable string table");
            return Vec::new();
        }
    };
    doc.descendants()
        .filter(|n| n.has_tag_name("string"))
        .filter_map(|n| n.attribute("id"))
        .filter_map(|id| id.parse().ok())
        .collect()
}

/// Identifiers from a `strings.po` message catalog.
fn message_catalog_ids(file: &Path) -> Vec<u32> {
    let content = match std::fs::read(file) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::debug!(file = %file.display(), error = %e, "unreadable, skipping");
            return Vec::new();
        }
    };
    MSGCTXT_RE
        .captures_iter(&content)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}
