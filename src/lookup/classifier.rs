use crate::sector::SectorMap;

/// A prefix paired with the index of its sector in the map
#[derive(Debug, Clone)]
struct RankedPrefix {
    prefix: String,
    sector: usize,
}

/// Longest-prefix matcher over a [`SectorMap`]
///
/// All (prefix, sector) pairs are flattened in declaration order and then
/// stable-sorted by descending prefix length, so the first hit in the
/// ranked list is the longest match, and among equal lengths the one
/// declared first.
#[derive(Debug, Clone)]
pub struct SectorClassifier {
    ranked: Vec<RankedPrefix>,
}

impl SectorClassifier {
    pub fn new(sectors: &SectorMap) -> Self {
        let mut ranked: Vec<RankedPrefix> = sectors
            .iter()
            .enumerate()
            .flat_map(|(idx, sector)| {
                sector.prefixes.iter().map(move |p| RankedPrefix {
                    prefix: p.clone(),
                    sector: idx,
                })
            })
            .collect();
        // sort_by_key is stable
        ranked.sort_by_key(|r| std::cmp::Reverse(r.prefix.len()));

        Self { ranked }
    }

    /// Index of the winning sector for a canonical code string
    pub fn classify(&self, code: &str) -> Option<usize> {
        self.ranked
            .iter()
            .find(|r| code.starts_with(r.prefix.as_str()))
            .map(|r| r.sector)
    }

    /// Number of (prefix, sector) pairs
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
