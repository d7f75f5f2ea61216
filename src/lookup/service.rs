use super::classifier::SectorClassifier;
use super::code::CodeInput;
use crate::sector::{read_sector_map, SectorMap};
use crate::table::{read_table, SicEntry, SicTable};
use anyhow::Result;
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN: OnceLock<SicLookup> = OnceLock::new();

/// Query service over a SIC table and a sector map
///
/// Both inputs are owned and never mutated after construction. Every
/// query returns owned data.
#[derive(Debug, Clone)]
pub struct SicLookup {
    table: SicTable,
    sectors: SectorMap,
    classifier: SectorClassifier,
}

impl SicLookup {
    pub fn new(table: SicTable, sectors: SectorMap) -> Self {
        let classifier = SectorClassifier::new(&sectors);
        Self {
            table,
            sectors,
            classifier,
        }
    }

    /// Service over the compiled-in table and sector map
    pub fn builtin() -> &'static SicLookup {
        BUILTIN.get_or_init(|| {
            SicLookup::new(SicTable::builtin().clone(), SectorMap::builtin().clone())
        })
    }

    /// Service over files where given, built-in data otherwise
    pub fn from_sources(table_path: Option<&Path>, sector_map_path: Option<&Path>) -> Result<Self> {
        let table = match table_path {
            Some(path) => read_table(path)?,
            None => SicTable::builtin().clone(),
        };
        let sectors = match sector_map_path {
            Some(path) => read_sector_map(path)?,
            None => SectorMap::builtin().clone(),
        };
        Ok(Self::new(table, sectors))
    }

    /// Sector whose longest prefix matches the code, if any
    pub fn classify_sector<'a>(&self, code: impl Into<CodeInput<'a>>) -> Option<&str> {
        let canonical = code.into().canonical()?;
        self.classifier
            .classify(&canonical)
            .map(|idx| self.sectors.sector_at(idx).name.as_str())
    }

    /// Every table entry with exactly this code, in table order
    pub fn lookup_details<'a>(&self, code: impl Into<CodeInput<'a>>) -> Vec<SicEntry> {
        let Some(code) = code
            .into()
            .normalize()
            .and_then(|n| u32::try_from(n).ok())
        else {
            return Vec::new();
        };
        self.table.matching(code).cloned().collect()
    }

    /// Copy of the prefixes declared for a sector (case-sensitive)
    pub fn prefixes_for_sector(&self, name: &str) -> Vec<String> {
        self.sectors
            .prefixes(name)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    pub fn table(&self) -> &SicTable {
        &self.table
    }

    pub fn sectors(&self) -> &SectorMap {
        &self.sectors
    }
}
