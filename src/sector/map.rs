use anyhow::{bail, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A sector and the SIC prefixes that belong to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub prefixes: Vec<String>,
}

/// Ordered, read-only mapping from sector name to SIC code prefixes
///
/// Declaration order matters: when two sectors carry a prefix of the same
/// length that matches a code, the sector declared first wins.
#[derive(Debug, Clone, Default)]
pub struct SectorMap {
    sectors: Vec<Sector>,
    by_name: FxHashMap<String, usize>,
}

impl SectorMap {
    /// Build a map from user-supplied sectors.
    ///
    /// Rejects empty or duplicate sector names and prefixes that are not
    /// non-empty ASCII digit strings.
    pub fn from_sectors(sectors: Vec<Sector>) -> Result<Self> {
        for sector in &sectors {
            if sector.name.is_empty() {
                bail!("Sector name must not be empty");
            }
            if let Some(bad) = sector
                .prefixes
                .iter()
                .find(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
            {
                bail!("Sector {:?} has invalid prefix {:?}", sector.name, bad);
            }
        }

        let mut by_name = FxHashMap::default();
        for (idx, sector) in sectors.iter().enumerate() {
            if by_name.insert(sector.name.clone(), idx).is_some() {
                bail!("Duplicate sector {:?}", sector.name);
            }
        }

        Ok(Self { sectors, by_name })
    }

    /// Build from static data known to be valid
    pub(crate) fn from_static(data: &[(&str, &[&str])]) -> Self {
        let sectors: Vec<Sector> = data
            .iter()
            .map(|&(name, prefixes)| Sector {
                name: name.to_string(),
                prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
            })
            .collect();
        let by_name = sectors
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.name.clone(), idx))
            .collect();
        Self { sectors, by_name }
    }

    /// Prefixes declared for `name` (case-sensitive)
    pub fn prefixes(&self, name: &str) -> Option<&[String]> {
        self.by_name
            .get(name)
            .map(|&idx| self.sectors[idx].prefixes.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Sectors in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Sector> {
        self.sectors.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|s| s.name.as_str())
    }

    pub(crate) fn sector_at(&self, idx: usize) -> &Sector {
        &self.sectors[idx]
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector(name: &str, prefixes: &[&str]) -> Sector {
        Sector {
            name: name.to_string(),
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let map = SectorMap::from_sectors(vec![sector("Technology", &["357", "48"])]).unwrap();
        assert_eq!(
            map.prefixes("Technology"),
            Some(&["357".to_string(), "48".to_string()][..])
        );
        assert_eq!(map.prefixes("technology"), None);
        assert_eq!(map.prefixes(""), None);
    }

    #[test]
    fn test_declaration_order_kept() {
        let map = SectorMap::from_sectors(vec![
            sector("Zeta", &["1"]),
            sector("Alpha", &["2"]),
            sector("Mid", &["3"]),
        ])
        .unwrap();
        let names: Vec<&str> = map.names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = SectorMap::from_sectors(vec![sector("", &["1"])]).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let err = SectorMap::from_sectors(vec![sector("A", &["1"]), sector("A", &["2"])])
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_rejects_bad_prefix() {
        assert!(SectorMap::from_sectors(vec![sector("A", &["1a"])]).is_err());
        assert!(SectorMap::from_sectors(vec![sector("A", &[""])]).is_err());
        assert!(SectorMap::from_sectors(vec![sector("A", &["-1"])]).is_err());
    }

    #[test]
    fn test_same_prefix_in_two_sectors_allowed() {
        let map =
            SectorMap::from_sectors(vec![sector("A", &["48"]), sector("B", &["48"])]).unwrap();
        assert_eq!(map.len(), 2);
    }
}
