//! Fixture helpers shared by the check unit tests.

use std::path::Path;

use tempfile::TempDir;

use crate::context::CheckContext;

/// A minimal valid manifest with the given extension points.
pub fn minimal_manifest(id: &str, version: &str, points: &[&str]) -> String {
    manifest_with_metadata(id, version, points, &[])
}

/// A minimal valid manifest with extension points and extra scalar
/// metadata tags.
pub fn manifest_with_metadata(
    id: &str,
    version: &str,
    points: &[&str],
    metadata: &[(&str, &str)],
) -> String {
    let extensions: String = points
        .iter()
        .map(|p| format!("  <extension point=\"{p}\"/>\n"))
        .collect();
    let tags: String = metadata
        .iter()
        .map(|(tag, text)| format!("    <{tag}>{text}</{tag}>\n"))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <addon id=\"{id}\" name=\"Test\" version=\"{version}\" provider-name=\"tester\">\n\
         \x20 <requires><import addon=\"xbmc.python\" version=\"2.1.0\"/></requires>\n\
         {extensions}\
         \x20 <extension point=\"xbmc.addon.metadata\">\n\
         {tags}\
         \x20 </extension>\n\
         </addon>\n"
    )
}

/// Write a fixture file under the addon directory, creating parents.
pub fn write_file(dir: &Path, rel: &str, contents: &[u8]) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Build a context over a fresh temp addon with the given manifest fields.
pub fn context_from_xml(
    branch: &str,
    version: &str,
    points: &[&str],
) -> (TempDir, CheckContext) {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "addon.xml",
        minimal_manifest("plugin.video.test", version, points).as_bytes(),
    );
    let ctx = context_in(dir.path(), branch);
    (dir, ctx)
}

/// Build a context over an existing addon directory.
pub fn context_in(dir: &Path, branch: &str) -> CheckContext {
    CheckContext::new(dir, branch, None, None, None).unwrap()
}
