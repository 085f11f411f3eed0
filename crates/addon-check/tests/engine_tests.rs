//! End-to-end checker runs against fixture addon trees.

use std::path::Path;

use addon_check::{AddonCheck, Error};
use addon_manifest::Version;

/// Write a file under the addon root, creating parent directories.
fn write(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Build an addon tree that passes every check on frodo.
fn clean_addon(root: &Path) {
    let manifest = r#"<?xml version="1.0" encoding="UTF-8"?>
<addon id="plugin.video.demo" name="Demo" version="1.2.0" provider-name="someone">
  <requires>
    <import addon="xbmc.python" version="2.1.0"/>
  </requires>
  <extension point="xbmc.python.pluginsource" library="default.py">
    <provides>video</provides>
  </extension>
  <extension point="xbmc.addon.metadata">
    <summary>Demo</summary>
    <description>Demo addon</description>
    <language>en</language>
    <license>GPL-2.0</license>
    <forum>http://forum.example.com</forum>
    <website>http://example.com</website>
    <source>http://example.com/src</source>
    <email>dev@example.com</email>
  </extension>
</addon>
"#;
    write(root, "addon.xml", manifest.as_bytes());
    write(root, "LICENSE.txt", b"GPL-2.0\n");
    write(root, "changelog.txt", b"1.2.0: initial release\n");
    write(root, "default.py", b"import xbmc\n\ndef main():\n    pass\n");
    image::RgbaImage::new(256, 256)
        .save(root.join("icon.png"))
        .unwrap();
}

#[test]
fn test_clean_addon_reports_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    clean_addon(dir.path());

    let check = AddonCheck::new(
        dir.path(),
        "frodo",
        Some("plugin.video.demo"),
        Some(Version::parse("1.2.0").unwrap()),
        None,
    )
    .unwrap();
    assert_eq!(check.run(), (0, 0));
}

#[test]
fn test_rerun_is_deterministic() {
    let dir = tempfile::TempDir::new().unwrap();
    clean_addon(dir.path());
    // Inject one warning and one error so the counts are non-trivial.
    write(dir.path(), "broken.py", b"print 'debugging'\n");
    write(dir.path(), "native.so", b"\x7fELF");

    let check = AddonCheck::new(dir.path(), "frodo", None, None, None).unwrap();
    let first = check.run();
    let second = check.run();
    assert_eq!(first, second);
    assert_eq!(first, (1, 1));
}

#[test]
fn test_unparseable_manifest_is_fatal_not_a_tally() {
    let dir = tempfile::TempDir::new().unwrap();
    // No <requires> element: construction must fail before any check runs,
    // distinguishable from a legitimately clean (0, 0) result.
    write(
        dir.path(),
        "addon.xml",
        b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<addon id=\"a\" name=\"a\" version=\"1.0.0\" provider-name=\"p\"/>\n",
    );
    let err = AddonCheck::new(dir.path(), "frodo", None, None, None).unwrap_err();
    assert!(matches!(
        err,
        Error::Manifest(addon_manifest::Error::MissingRequires)
    ));
}

#[test]
fn test_missing_addon_root_is_fatal() {
    let err = AddonCheck::new(Path::new("/nonexistent/addon"), "frodo", None, None, None)
        .unwrap_err();
    assert!(matches!(err, Error::AddonRootNotFound(_)));
}

#[test]
fn test_findings_accumulate_without_short_circuit() {
    let dir = tempfile::TempDir::new().unwrap();
    clean_addon(dir.path());
    // Three independent defects in one tree.
    std::fs::remove_file(dir.path().join("LICENSE.txt")).unwrap();
    write(dir.path(), "Thumbs.db", b"");
    write(dir.path(), "util.py", b"path = os.getcwd()\n");

    let check = AddonCheck::new(dir.path(), "frodo", None, None, None).unwrap();
    let (warnings, errors) = check.run();
    assert_eq!(warnings, 1); // deprecated os.getcwd
    assert_eq!(errors, 2); // missing LICENSE.txt, forbidden Thumbs.db
}

#[test]
fn test_unsupported_branch_counts_one_error() {
    let dir = tempfile::TempDir::new().unwrap();
    clean_addon(dir.path());

    let check = AddonCheck::new(dir.path(), "helix", None, None, None).unwrap();
    // The branch error is the only finding: the mandatory xbmc.python pin
    // cannot be validated against an unknown branch and is skipped.
    assert_eq!(check.run(), (0, 1));
}

#[test]
fn test_two_component_version_fails_on_frodo_but_not_eden() {
    for (branch, python_pin, expected) in [("frodo", "2.1.0", (0, 1)), ("eden", "2.0", (0, 0))] {
        let dir = tempfile::TempDir::new().unwrap();
        clean_addon(dir.path());
        let manifest = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<addon id="plugin.video.demo" name="Demo" version="1.2" provider-name="someone">
  <requires>
    <import addon="xbmc.python" version="{python_pin}"/>
  </requires>
  <extension point="xbmc.python.pluginsource" library="default.py"/>
  <extension point="xbmc.addon.metadata">
    <language>en</language>
    <license>GPL-2.0</license>
    <forum>f</forum>
    <website>w</website>
    <source>s</source>
    <email>e</email>
  </extension>
</addon>
"#
        );
        write(dir.path(), "addon.xml", manifest.as_bytes());

        let check = AddonCheck::new(dir.path(), branch, None, None, None).unwrap();
        assert_eq!(check.run(), expected, "branch {branch}");
    }
}

#[test]
fn test_claimed_version_with_fewer_components_mismatches() {
    let dir = tempfile::TempDir::new().unwrap();
    clean_addon(dir.path());

    // The manifest says 1.2.0; a claimed 1.2 is a different version.
    let check = AddonCheck::new(
        dir.path(),
        "frodo",
        None,
        Some(Version::parse("1.2").unwrap()),
        None,
    )
    .unwrap();
    assert_eq!(check.run(), (0, 1));
}
