use super::{SicCodeValue, SicTable};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Summary figures for a SIC table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub entry_count: usize,
    pub distinct_codes: usize,
    /// Codes with more than one row, ascending
    pub duplicate_codes: Vec<SicCodeValue>,
    /// (office, entry count), largest first
    pub offices: Vec<(String, usize)>,
}

impl TableStats {
    pub fn compute(table: &SicTable) -> Self {
        let mut code_counts: FxHashMap<SicCodeValue, usize> = FxHashMap::default();
        let mut office_counts: FxHashMap<&str, usize> = FxHashMap::default();

        for entry in table.entries() {
            *code_counts.entry(entry.sic_code).or_insert(0) += 1;
            *office_counts.entry(entry.office.as_str()).or_insert(0) += 1;
        }

        let mut duplicate_codes: Vec<SicCodeValue> = code_counts
            .iter()
            .filter(|&(_, &n)| n > 1)
            .map(|(&code, _)| code)
            .collect();
        duplicate_codes.sort_unstable();

        let mut offices: Vec<(String, usize)> = office_counts
            .into_iter()
            .map(|(office, n)| (office.to_string(), n))
            .collect();
        offices.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            entry_count: table.len(),
            distinct_codes: code_counts.len(),
            duplicate_codes,
            offices,
        }
    }
}
