//! Addon version values.
//!
//! Addon versions have two or three numeric components (`major.minor` or
//! `major.minor.patch`). Ordering is lexicographic over the components.
//! Equality keeps the component count significant: `1.2` and `1.2.0` are
//! different versions even though the shared components match, and some
//! platform branches only accept the three-component form.
//!
//! # Examples
//!
//! ```
//! use addon_manifest::Version;
//!
//! let old: Version = "1.2.0".parse().unwrap();
//! let new: Version = "1.3.0".parse().unwrap();
//! assert!(old < new);
//!
//! let short: Version = "1.2".parse().unwrap();
//! assert_ne!(short, old);
//! assert_eq!(short.components().len(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A 2- or 3-component addon version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    components: Vec<u32>,
}

impl Version {
    /// Parse a version string.
    ///
    /// Accepts `major.minor` and `major.minor.patch` where every component
    /// is a non-negative integer. Anything else is [`Error::InvalidVersion`].
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(Error::InvalidVersion(text.to_string()));
        }

        let mut components = Vec::with_capacity(parts.len());
        for part in parts {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidVersion(text.to_string()));
            }
            let value: u32 = part
                .parse()
                .map_err(|_| Error::InvalidVersion(text.to_string()))?;
            components.push(value);
        }

        Ok(Self { components })
    }

    /// The numeric components in order.
    ///
    /// The slice length is the original component count of the parsed
    /// string, which structural checks rely on.
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Whether the version carries an explicit patch component.
    pub fn has_patch(&self) -> bool {
        self.components.len() == 3
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.components.iter().map(u32::to_string).collect();
        f.write_str(&rendered.join("."))
    }
}
