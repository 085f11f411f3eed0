//! Supported platform branches and their dependency policy.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A target-platform compatibility branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Eden,
    Frodo,
    Gotham,
}

/// Mandatory platform dependency versions for the eden branch.
const EDEN_DEPENDENCIES: &[(&str, &str)] = &[("xbmc.python", "2.0")];

/// Mandatory platform dependency versions for the frodo branch.
const FRODO_DEPENDENCIES: &[(&str, &str)] = &[
    ("xbmc.addon", "12.0.0"),
    ("xbmc.core", "0.1.0"),
    ("xbmc.gui", "4.0.0"),
    ("xbmc.json", "6.0.0"),
    ("xbmc.metadata", "2.1.0"),
    ("xbmc.python", "2.1.0"),
];

/// Mandatory platform dependency versions for the gotham branch.
const GOTHAM_DEPENDENCIES: &[(&str, &str)] = &[
    ("xbmc.addon", "12.0.0"),
    ("xbmc.core", "0.1.0"),
    ("xbmc.gui", "5.0.1"),
    ("xbmc.json", "6.6.0"),
    ("xbmc.metadata", "2.1.0"),
    ("xbmc.python", "2.14.0"),
];

impl Branch {
    /// Every supported branch, oldest first.
    pub const ALL: [Branch; 3] = [Branch::Eden, Branch::Frodo, Branch::Gotham];

    /// The lowercase branch name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eden => "eden",
            Self::Frodo => "frodo",
            Self::Gotham => "gotham",
        }
    }

    /// Whether addon versions targeting this branch must carry all three
    /// components. Eden still accepts the historical two-component form.
    pub fn requires_patch_version(&self) -> bool {
        !matches!(self, Self::Eden)
    }

    /// The exact version this branch mandates for a platform dependency,
    /// or `None` if the dependency id is not platform-mandatory here.
    pub fn mandatory_dependency(&self, addon_id: &str) -> Option<&'static str> {
        let table = match self {
            Self::Eden => EDEN_DEPENDENCIES,
            Self::Frodo => FRODO_DEPENDENCIES,
            Self::Gotham => GOTHAM_DEPENDENCIES,
        };
        table
            .iter()
            .find(|(id, _)| *id == addon_id)
            .map(|(_, version)| *version)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Branch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "eden" => Ok(Self::Eden),
            "frodo" => Ok(Self::Frodo),
            "gotham" => Ok(Self::Gotham),
            other => Err(Error::UnknownBranch(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_known_branches() {
        for branch in Branch::ALL {
            assert_eq!(Branch::from_str(branch.as_str()).unwrap(), branch);
        }
    }

    #[test]
    fn test_from_str_unknown_branch() {
        let err = Branch::from_str("helix").unwrap_err();
        assert!(matches!(err, Error::UnknownBranch(name) if name == "helix"));
    }

    #[test]
    fn test_eden_accepts_two_component_versions() {
        assert!(!Branch::Eden.requires_patch_version());
        assert!(Branch::Frodo.requires_patch_version());
        assert!(Branch::Gotham.requires_patch_version());
    }

    #[test]
    fn test_mandatory_dependency_lookup() {
        assert_eq!(Branch::Eden.mandatory_dependency("xbmc.python"), Some("2.0"));
        assert_eq!(Branch::Frodo.mandatory_dependency("xbmc.python"), Some("2.1.0"));
        assert_eq!(Branch::Gotham.mandatory_dependency("xbmc.python"), Some("2.14.0"));
        assert_eq!(Branch::Gotham.mandatory_dependency("xbmc.gui"), Some("5.0.1"));
    }

    #[test]
    fn test_non_platform_dependency_is_unmanaged() {
        assert_eq!(Branch::Frodo.mandatory_dependency("script.module.simplejson"), None);
        assert_eq!(Branch::Eden.mandatory_dependency("xbmc.gui"), None);
    }
}
