//! Language directory naming convention.

use crate::checks::Check;
use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// Warns for language directories whose first word is not capitalized
/// (the platform matches them against capitalized language names).
pub struct LanguageDirs;

impl Check for LanguageDirs {
    fn name(&self) -> &'static str {
        "language-dirs"
    }

    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()> {
        let language_root = ctx.addon_path.join("resources").join("language");
        if !language_root.is_dir() {
            return Ok(());
        }
        for entry in std::fs::read_dir(&language_root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let first_word = name.split_whitespace().next().unwrap_or("");
            let capitalized = first_word
                .chars()
                .next()
                .is_some_and(char::is_uppercase);
            if !capitalized {
                report.warn(format!("language directory '{name}' is not capitalized"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testutil::{context_from_xml, context_in, write_file};

    #[test]
    fn test_capitalized_names_pass() {
        let (dir, _) = context_from_xml("frodo", "1.0.0", &[]);
        write_file(dir.path(), "resources/language/English/strings.po", b"");
        write_file(
            dir.path(),
            "resources/language/Portuguese (Brazil)/strings.po",
            b"",
        );
        let ctx = context_in(dir.path(), "frodo");

        let mut report = Report::new();
        LanguageDirs.run(&ctx, &mut report).unwrap();
        assert_eq!(report.counts(), (0, 0));
    }

    #[test]
    fn test_lowercase_name_warns() {
        let (dir, _) = context_from_xml("frodo", "1.0.0", &[]);
        write_file(dir.path(), "resources/language/english/strings.po", b"");
        let ctx = context_in(dir.path(), "frodo");

        let mut report = Report::new();
        LanguageDirs.run(&ctx, &mut report).unwrap();
        assert_eq!(report.counts(), (1, 0));
    }

    #[test]
    fn test_only_first_word_matters() {
        let (dir, _) = context_from_xml("frodo", "1.0.0", &[]);
        write_file(
            dir.path(),
            "resources/language/Chinese (simple)/strings.po",
            b"",
        );
        let ctx = context_in(dir.path(), "frodo");

        let mut report = Report::new();
        LanguageDirs.run(&ctx, &mut report).unwrap();
        assert_eq!(report.counts(), (0, 0));
    }

    #[test]
    fn test_no_language_directory_is_fine() {
        let (_dir, ctx) = context_from_xml("frodo", "1.0.0", &[]);
        let mut report = Report::new();
        LanguageDirs.run(&ctx, &mut report).unwrap();
        assert_eq!(report.counts(), (0, 0));
    }
}
