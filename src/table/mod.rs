pub mod entry;
pub mod parse;
pub mod stats;
pub mod store;

pub use entry::{SicCodeValue, SicEntry};
pub use parse::{parse_sic_csv, ParseReport, SkipReason, SkippedRow};
pub use stats::TableStats;
pub use store::{read_table, write_table};

use std::sync::OnceLock;
use tracing::{debug, warn};

// Generated by build.rs from data/sic_codes.csv:
// `static BUILTIN_ROWS: &[(u32, &str, &str)]`
include!(concat!(env!("OUT_DIR"), "/builtin_table.rs"));

static BUILTIN: OnceLock<SicTable> = OnceLock::new();

/// Run the CSV parser and log each skipped row as a warning
pub fn build_table(raw: &str) -> ParseReport {
    let report = parse_sic_csv(raw);
    for row in &report.skipped {
        warn!(line = row.line_number, reason = %row.reason, "skipping row: {}", row.line);
    }
    report
}

/// Immutable, ordered table of SIC entries
///
/// Entry order is the source row order. There is no mutable access once
/// the table is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SicTable {
    entries: Vec<SicEntry>,
}

impl SicTable {
    pub fn new(entries: Vec<SicEntry>) -> Self {
        Self { entries }
    }

    /// Parse CSV text, logging every skipped row
    pub fn from_csv(raw: &str) -> Self {
        Self::from(build_table(raw))
    }

    /// The table compiled into the crate
    pub fn builtin() -> &'static SicTable {
        BUILTIN.get_or_init(|| {
            let entries: Vec<SicEntry> = BUILTIN_ROWS
                .iter()
                .map(|&(code, office, industry)| SicEntry::new(code, office, industry))
                .collect();
            debug!(entries = entries.len(), "materialized builtin SIC table");
            Self { entries }
        })
    }

    pub fn entries(&self) -> &[SicEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries with exactly this code, in table order
    pub fn matching(&self, code: SicCodeValue) -> impl Iterator<Item = &SicEntry> {
        self.entries.iter().filter(move |e| e.sic_code == code)
    }
}

impl From<ParseReport> for SicTable {
    fn from(report: ParseReport) -> Self {
        Self::new(report.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_loaded() {
        let table = SicTable::builtin();
        assert!(table.len() > 400);
        // Same instance on every call
        assert!(std::ptr::eq(table, SicTable::builtin()));
    }

    #[test]
    fn test_builtin_known_rows() {
        let table = SicTable::builtin();
        let crops: Vec<_> = table.matching(100).collect();
        assert_eq!(crops.len(), 1);
        assert_eq!(crops[0].office, "Industrial Applications and Services");
        assert_eq!(crops[0].industry, "AGRICULTURAL PRODUCTION-CROPS");

        let fishing: Vec<_> = table.matching(900).collect();
        assert_eq!(fishing[0].industry, "FISHING, HUNTING AND TRAPPING");

        let software: Vec<_> = table.matching(7371).collect();
        assert_eq!(software[0].office, "Office of Technology");
    }

    #[test]
    fn test_builtin_preserves_source_order() {
        let codes: Vec<u32> = SicTable::builtin().entries().iter().map(|e| e.sic_code).collect();
        assert_eq!(codes.first(), Some(&100));
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_from_csv_drops_bad_rows() {
        let table = SicTable::from_csv("h\n100,A,CROPS\nbroken\n200,B,LIVESTOCK");
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[1].sic_code, 200);
    }

    #[test]
    fn test_matching_returns_duplicates_in_order() {
        let table = SicTable::new(vec![
            SicEntry::new(10, "A", "X"),
            SicEntry::new(20, "B", "Y"),
            SicEntry::new(10, "C", "Z"),
        ]);
        let offices: Vec<&str> = table.matching(10).map(|e| e.office.as_str()).collect();
        assert_eq!(offices, vec!["A", "C"]);
        assert_eq!(table.matching(30).count(), 0);
    }
}
