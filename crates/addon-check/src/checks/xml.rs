//! XML well-formedness and encoding declarations.

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Errors for every `.xml` file that fails to parse or lacks an encoding
/// declaration. The two findings are independent.
pub struct XmlWellFormed;

impl Check for XmlWellFormed {
    fn name(&self) -> &'static str {
        "xml-files"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        for file in &ctx.files {
            if file.extension().and_then(|e| e.to_str()) != Some("xml") {
                continue;
            }
            let content = match std::fs::read(file) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    report.fail(format!("cannot read {}: {e}", file.display()));
                    continue;
                }
            };
            if !has_encoding_declaration(&content) {
                report.fail(format!(
                    "{}: missing encoding declaration",
                    file.display()
                ));
            }
            if let Err(e) = roxmltree::Document::parse(&content) {
                report.fail(format!("{}: invalid XML: {e}", file.display()));
            }
        }
        Ok(())
    }
}

/// Whether the document starts with an XML declaration naming an encoding.
fn has_encoding_declaration(content: &str) -> bool {
    let content = content.trim_start_matches('\u{feff}').trim_start();
    if !content.starts_with("<?xml") {
        return false;
    }
    match content.find("?>") {
        Some(end) => content[..end].contains("encoding"),
        None => false,
    }
}
