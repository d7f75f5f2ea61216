mod builtin;
pub mod map;

pub use map::{Sector, SectorMap};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

static BUILTIN: OnceLock<SectorMap> = OnceLock::new();

impl SectorMap {
    /// The curated map compiled into the crate
    pub fn builtin() -> &'static SectorMap {
        BUILTIN.get_or_init(|| SectorMap::from_static(builtin::BUILTIN_SECTORS))
    }
}

/// Load a sector map from a JSON array of `{"name": .., "prefixes": [..]}`
pub fn read_sector_map(path: &Path) -> Result<SectorMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sector map {}", path.display()))?;
    let sectors: Vec<Sector> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse sector map {}", path.display()))?;

    debug!(path = %path.display(), sectors = sectors.len(), "loaded sector map");
    SectorMap::from_sectors(sectors)
        .with_context(|| format!("Invalid sector map {}", path.display()))
}
