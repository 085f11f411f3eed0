//! Localization string identifier ranges.
//!
//! Addons own a numeric identifier namespace for their localization
//! strings. Each addon type has its own sub-range; the global range bounds
//! what any addon may use at all.

use addon_manifest::AddonType;

/// An inclusive numeric identifier range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub min: u32,
    pub max: u32,
}

impl IdRange {
    pub fn contains(&self, id: u32) -> bool {
        id >= self.min && id <= self.max
    }
}

impl std::fmt::Display for IdRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// The range valid for every addon, regardless of type.
pub const GLOBAL_STRING_ID_RANGE: IdRange = IdRange {
    min: 30000,
    max: 33999,
};

/// The identifier range reserved for a given addon type, or `None` for
/// types without a dedicated sub-range (they are bounded only by
/// [`GLOBAL_STRING_ID_RANGE`]).
pub fn string_id_range(addon_type: AddonType) -> Option<IdRange> {
    match addon_type {
        AddonType::Plugin => Some(IdRange {
            min: 30000,
            max: 30999,
        }),
        AddonType::Skin => Some(IdRange {
            min: 31000,
            max: 31999,
        }),
        AddonType::Script => Some(IdRange {
            min: 32000,
            max: 32999,
        }),
        AddonType::Webinterface | AddonType::Scraper => None,
    }
}
