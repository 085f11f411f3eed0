//! The check units run against every submission.
//!
//! Each check is independent and read-only with respect to the addon tree
//! and manifest; it contributes to the shared [`Report`] through `warn` and
//! `fail`. Checks are registered in one explicit ordered list so the set
//! stays enumerable and each unit stays testable in isolation. Order is
//! not significant; every check must be independently satisfiable.

pub mod branch;
pub mod dependencies;
pub mod eol;
pub mod forbidden;
pub mod identity;
pub mod images;
pub mod language;
pub mod metadata;
pub mod sources;
pub mod strings;
pub mod structure;
pub mod xml;

#[cfg(test)]
pub(crate) mod testutil;

use crate::context::CheckContext;
use crate::error::Result;
use crate::report::Report;

/// A single validation rule.
///
/// Implementations must not abort the run: expected faults degrade to a
/// diagnostic or a recorded error per the check's own contract, and an
/// `Err` return is caught by the engine without touching the counters.
pub trait Check {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Run the check, recording findings in `report`.
    fn run(&self, ctx: &CheckContext, report: &mut Report) -> Result<()>;
}

/// Every built-in check, in registration order.
pub fn builtin_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(branch::BranchSupported),
        Box::new(branch::VersionShape),
        Box::new(identity::IdentityMatch),
        Box::new(metadata::RecommendedMetadata),
        Box::new(dependencies::DependencyVersions),
        Box::new(structure::MandatoryFiles),
        Box::new(forbidden::ForbiddenFiles),
        Box::new(forbidden::ForbiddenExtensionPoint),
        Box::new(eol::LineEndings),
        Box::new(images::ImageSizes),
        Box::new(sources::SourcePatterns),
        Box::new(strings::StringIds),
        Box::new(xml::XmlWellFormed),
        Box::new(language::LanguageDirs),
    ]
}
