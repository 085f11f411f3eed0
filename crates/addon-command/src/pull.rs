//! Pull mechanisms for materializing an addon from a remote location.
//!
//! The mechanism set is closed: git, svn, hg, and zip archives. Submission
//! messages name the mechanism as text, so [`PullKind`] parses the name and
//! rejects anything else up front instead of failing midway through an
//! integration.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::process::run;

/// A supported pull mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullKind {
    Git,
    Svn,
    Hg,
    Zip,
}

impl PullKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Svn => "svn",
            Self::Hg => "hg",
            Self::Zip => "zip",
        }
    }
}

impl fmt::Display for PullKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PullKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "git" => Ok(Self::Git),
            "svn" => Ok(Self::Svn),
            "hg" => Ok(Self::Hg),
            "zip" => Ok(Self::Zip),
            other => Err(Error::UnknownPullKind(other.to_string())),
        }
    }
}

/// Materialize `addon_id` from `url` into `dest_dir/<addon_id>`.
///
/// Source-control metadata (`.git`, `.hg`, ignore files) is stripped so the
/// result is a plain directory tree ready for inspection and staging.
pub fn pull(
    kind: PullKind,
    addon_id: &str,
    url: &str,
    revision: Option<&str>,
    dest_dir: &Path,
) -> Result<()> {
    tracing::info!(%kind, addon_id, url, ?revision, "pulling addon");
    match kind {
        PullKind::Git => git_pull(addon_id, url, revision, dest_dir),
        PullKind::Svn => svn_pull(addon_id, url, revision, dest_dir),
        PullKind::Hg => hg_pull(addon_id, url, revision, dest_dir),
        PullKind::Zip => zip_pull(addon_id, url, dest_dir),
    }
}

fn git_pull(addon_id: &str, url: &str, revision: Option<&str>, dest_dir: &Path) -> Result<()> {
    run("git", &["clone", url, addon_id], dest_dir)?;
    let addon_dir = dest_dir.join(addon_id);
    if let Some(revision) = revision {
        run("git", &["checkout", revision], &addon_dir)?;
    }
    std::fs::remove_dir_all(addon_dir.join(".git"))?;
    remove_if_present(&addon_dir.join(".gitignore"))?;
    Ok(())
}

fn svn_pull(addon_id: &str, url: &str, revision: Option<&str>, dest_dir: &Path) -> Result<()> {
    match revision {
        Some(revision) => run("svn", &["export", url, "-r", revision, addon_id], dest_dir)?,
        None => run("svn", &["export", url, addon_id], dest_dir)?,
    };
    Ok(())
}

fn hg_pull(addon_id: &str, url: &str, revision: Option<&str>, dest_dir: &Path) -> Result<()> {
    match revision {
        Some(revision) => run("hg", &["clone", "-r", revision, url, addon_id], dest_dir)?,
        None => run("hg", &["clone", url, addon_id], dest_dir)?,
    };
    let addon_dir = dest_dir.join(addon_id);
    std::fs::remove_dir_all(addon_dir.join(".hg"))?;
    remove_if_present(&addon_dir.join(".hgignore"))?;
    Ok(())
}

fn zip_pull(addon_id: &str, url: &str, dest_dir: &Path) -> Result<()> {
    let archive = format!("{addon_id}.zip");
    run("curl", &["-sfL", "-o", &archive, url], dest_dir)?;
    run("unzip", &["-oq", &archive], dest_dir)?;
    std::fs::remove_file(dest_dir.join(&archive))?;
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<()> {
    if path.is_file() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_kind_from_str() {
        assert_eq!(PullKind::from_str("git").unwrap(), PullKind::Git);
        assert_eq!(PullKind::from_str("svn").unwrap(), PullKind::Svn);
        assert_eq!(PullKind::from_str("hg").unwrap(), PullKind::Hg);
        assert_eq!(PullKind::from_str("zip").unwrap(), PullKind::Zip);
    }

    #[test]
    fn test_pull_kind_unknown_rejected() {
        let err = PullKind::from_str("cvs").unwrap_err();
        assert!(matches!(err, Error::UnknownPullKind(name) if name == "cvs"));
    }

    #[test]
    fn test_pull_kind_round_trips() {
        for kind in [PullKind::Git, PullKind::Svn, PullKind::Hg, PullKind::Zip] {
            assert_eq!(PullKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_git_pull_from_local_repository() {
        let remote = tempfile::TempDir::new().unwrap();
        let staging = tempfile::TempDir::new().unwrap();

        // Build a throwaway git repository to pull from.
        run("git", &["init", "-q"], remote.path()).unwrap();
        run("git", &["config", "user.email", "t@example.com"], remote.path()).unwrap();
        run("git", &["config", "user.name", "t"], remote.path()).unwrap();
        std::fs::write(remote.path().join("addon.xml"), "<addon/>").unwrap();
        std::fs::write(remote.path().join(".gitignore"), "*.pyc\n").unwrap();
        run("git", &["add", "."], remote.path()).unwrap();
        run("git", &["commit", "-qm", "init"], remote.path()).unwrap();

        let url = remote.path().to_str().unwrap();
        pull(PullKind::Git, "plugin.test", url, None, staging.path()).unwrap();

        let pulled = staging.path().join("plugin.test");
        assert!(pulled.join("addon.xml").is_file());
        assert!(!pulled.join(".git").exists());
        assert!(!pulled.join(".gitignore").exists());
    }
}
