//! Addon manifest model for addon-pr.
//!
//! This crate parses `addon.xml` manifests and provides the comparable
//! addon [`Version`] value used for dependency and identity checks.

pub mod error;
pub mod manifest;
pub mod version;

/// The canonical filename for addon manifests.
///
/// Every addon must place a file with this name at its root so the
/// checker and the intake pipeline can discover and validate it.
pub const MANIFEST_FILENAME: &str = "addon.xml";

pub use error::{Error, Result};
pub use manifest::{
    AddonType, Dependency, Extension, Manifest, MetadataValue, MODULE_POINT, REPOSITORY_POINT,
};
pub use version::Version;
