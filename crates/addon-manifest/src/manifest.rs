//! Addon manifest parsing for `addon.xml` files.
//!
//! Every addon ships a manifest named [`MANIFEST_FILENAME`](crate::MANIFEST_FILENAME)
//! (`addon.xml`) at its root. The manifest declares the addon identity and
//! version, its dependencies, the extension points it provides, and localized
//! descriptive metadata.
//!
//! # Example XML
//!
//! ```xml
//! <addon id="plugin.video.example" name="Example" version="1.0.0" provider-name="someone">
//!   <requires>
//!     <import addon="xbmc.python" version="2.1.0"/>
//!   </requires>
//!   <extension point="xbmc.python.pluginsource" library="default.py">
//!     <provides>video</provides>
//!   </extension>
//!   <extension point="xbmc.addon.metadata">
//!     <summary>An example</summary>
//!     <summary lang="fr">Un exemple</summary>
//!     <language>en</language>
//!   </extension>
//! </addon>
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::version::Version;

/// The extension point that carries descriptive metadata instead of a capability.
const METADATA_POINT: &str = "xbmc.addon.metadata";

/// The extension point that defines an addon repository. Addons must not
/// redistribute the repository mechanism, so declaring it is rejected.
pub const REPOSITORY_POINT: &str = "xbmc.addon.repository";

/// The extension point for library modules, which have no visible UI.
pub const MODULE_POINT: &str = "xbmc.python.module";

const SKIN_POINT: &str = "xbmc.gui.skin";
const WEBINTERFACE_POINT: &str = "xbmc.gui.webinterface";
const SCRAPER_POINT_PREFIX: &str = "xbmc.metadata.scraper";
const PLUGIN_SOURCE_POINT: &str = "xbmc.python.pluginsource";
const SCRIPT_ID_PREFIX: &str = "script";

/// Metadata fields indexed by language code rather than stored as plain text.
const LOCALIZED_FIELDS: [&str; 3] = ["summary", "description", "disclaimer"];

/// A declared dependency on another addon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Identifier of the addon depended on.
    pub id: String,
    /// Pinned version, if the dependency declares one.
    pub version: Option<String>,
}

/// A declared capability (any extension other than the metadata block).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// The extension point identifier.
    pub point: String,
    /// Remaining attributes of the extension element.
    pub attributes: BTreeMap<String, String>,
    /// Text of the `provides` child element, empty when absent.
    pub provides: String,
}

/// A metadata value: plain text, or a per-language mapping for the
/// localized fields (`summary`, `description`, `disclaimer`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Text(String),
    Localized(BTreeMap<String, String>),
}

/// The addon type, derived from the declared extension points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonType {
    Skin,
    Webinterface,
    Scraper,
    Plugin,
    Script,
}

impl AddonType {
    /// The canonical lowercase type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skin => "skin",
            Self::Webinterface => "webinterface",
            Self::Scraper => "scraper",
            Self::Plugin => "plugin",
            Self::Script => "script",
        }
    }

    /// The per-type directory name inside a sibling repository
    /// (e.g. `plugins` for plugin addons).
    pub fn directory(&self) -> &'static str {
        match self {
            Self::Skin => "skins",
            Self::Webinterface => "webinterfaces",
            Self::Scraper => "scrapers",
            Self::Plugin => "plugins",
            Self::Script => "scripts",
        }
    }
}

impl fmt::Display for AddonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddonType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "skin" => Ok(Self::Skin),
            "webinterface" => Ok(Self::Webinterface),
            "scraper" => Ok(Self::Scraper),
            "plugin" => Ok(Self::Plugin),
            "script" => Ok(Self::Script),
            other => Err(Error::UnknownAddonType(other.to_string())),
        }
    }
}

/// A parsed addon manifest. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Unique addon identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Provider (author) name.
    pub provider: String,
    /// Addon version.
    pub version: Version,
    /// Declared dependencies, in document order.
    pub dependencies: Vec<Dependency>,
    /// Declared capabilities, in document order (metadata excluded).
    pub extensions: Vec<Extension>,
    /// Descriptive metadata.
    pub metadata: BTreeMap<String, MetadataValue>,
    /// Addon type derived from the capabilities and the addon id.
    pub addon_type: AddonType,
}

impl Manifest {
    /// Read and parse the manifest of the addon rooted at `addon_dir`.
    pub fn load(addon_dir: &Path) -> Result<Self> {
        let path = addon_dir.join(crate::MANIFEST_FILENAME);
        if !path.is_file() {
            return Err(Error::ManifestNotFound(path));
        }
        let content = std::fs::read_to_string(&path)?;
        Self::from_xml(&content)
    }

    /// Parse a manifest from an XML string.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)
            .map_err(|e| Error::ManifestParse(e.to_string()))?;
        let root = doc.root_element();

        let id = root.attribute("id").unwrap_or_default().to_string();
        let name = root.attribute("name").unwrap_or_default().to_string();
        let provider = root
            .attribute("provider-name")
            .unwrap_or_default()
            .to_string();
        let version = root
            .attribute("version")
            .ok_or(Error::MissingAttribute("version"))
            .and_then(Version::parse)?;

        let requires = root
            .children()
            .find(|n| n.is_element() && n.has_tag_name("requires"))
            .ok_or(Error::MissingRequires)?;
        let dependencies = requires
            .children()
            .filter(|n| n.is_element())
            .map(|n| Dependency {
                id: n.attribute("addon").unwrap_or_default().to_string(),
                version: n.attribute("version").map(str::to_string),
            })
            .collect();

        let mut extensions = Vec::new();
        let mut metadata = BTreeMap::new();
        for node in doc.descendants().filter(|n| n.has_tag_name("extension")) {
            if node.attribute("point") == Some(METADATA_POINT) {
                metadata = parse_metadata(&node);
            } else {
                extensions.push(parse_extension(&node));
            }
        }

        let addon_type = derive_type(&id, &extensions);

        Ok(Self {
            id,
            name,
            provider,
            version,
            dependencies,
            extensions,
            metadata,
            addon_type,
        })
    }

    /// Whether the addon is marked broken. The `broken` metadata key alone
    /// decides this; its value is irrelevant.
    pub fn is_broken(&self) -> bool {
        self.metadata.contains_key("broken")
    }

    /// The declared extension points, metadata excluded.
    pub fn extension_points(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.point.as_str()).collect()
    }
}

fn parse_extension(node: &roxmltree::Node<'_, '_>) -> Extension {
    let point = node.attribute("point").unwrap_or_default().to_string();
    let attributes = node
        .attributes()
        .filter(|a| a.name() != "point")
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect();
    let provides = node
        .children()
        .find(|n| n.is_element() && n.has_tag_name("provides"))
        .and_then(|n| n.text())
        .unwrap_or_default()
        .to_string();
    Extension {
        point,
        attributes,
        provides,
    }
}

fn parse_metadata(node: &roxmltree::Node<'_, '_>) -> BTreeMap<String, MetadataValue> {
    let mut metadata = BTreeMap::new();
    for child in node.children().filter(|n| n.is_element()) {
        let tag = child.tag_name().name().to_string();
        let text = child.text().unwrap_or_default().to_string();
        if LOCALIZED_FIELDS.contains(&tag.as_str()) {
            let lang = child.attribute("lang").unwrap_or("en").to_string();
            let entry = metadata
                .entry(tag)
                .or_insert_with(|| MetadataValue::Localized(BTreeMap::new()));
            if let MetadataValue::Localized(map) = entry {
                map.insert(lang, text);
            }
        } else {
            // Duplicate scalar tags overwrite, last one wins.
            metadata.insert(tag, MetadataValue::Text(text));
        }
    }
    metadata
}

/// Derive the addon type from the capabilities, in declaration order.
/// The first matching rule wins; addons with no matching capability
/// (including pure library modules) are scripts.
fn derive_type(id: &str, extensions: &[Extension]) -> AddonType {
    for extension in extensions {
        let point = extension.point.as_str();
        if point == SKIN_POINT {
            return AddonType::Skin;
        } else if point == WEBINTERFACE_POINT {
            return AddonType::Webinterface;
        } else if point.starts_with(SCRAPER_POINT_PREFIX) {
            return AddonType::Scraper;
        } else if point == PLUGIN_SOURCE_POINT && !id.starts_with(SCRIPT_ID_PREFIX) {
            return AddonType::Plugin;
        }
    }
    AddonType::Script
}
