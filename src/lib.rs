//! # sicx - SIC code lookup
//!
//! Maps U.S. Standard Industrial Classification (SIC) codes to a business
//! sector (longest-prefix match against a curated sector map) and to the
//! administrative office and industry title listed in the SEC reference
//! table (exact match).
//!
//! ## Architecture
//!
//! - [`table`] - Reference table: CSV parsing, the compiled-in table, JSON store
//! - [`sector`] - Sector map and its curated built-in data
//! - [`lookup`] - Code normalization, prefix classifier, query service
//! - [`output`] - Human and JSON rendering for the CLI
//! - [`utils`] - App data directory and configuration
//!
//! The reference table is parsed from `data/sic_codes.csv` by `build.rs`
//! and compiled into the crate, so no parsing happens at query time.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sicx::{classify_sector, lookup_details, prefixes_for_sector};
//!
//! assert_eq!(classify_sector(3571), Some("Technology"));
//! assert_eq!(classify_sector("abc"), None);
//!
//! for entry in lookup_details("7371") {
//!     println!("{}: {}", entry.office, entry.industry);
//! }
//!
//! let prefixes = prefixes_for_sector("Healthcare");
//! assert!(prefixes.contains(&"283".to_string()));
//! ```
//!
//! For custom data, build a [`SicLookup`] explicitly:
//!
//! ```no_run
//! use sicx::{SectorMap, SicLookup, SicTable};
//!
//! let table = SicTable::from_csv("code,office,industry\n100,Office A,CROPS");
//! let lookup = SicLookup::new(table, SectorMap::builtin().clone());
//! assert_eq!(lookup.lookup_details(100).len(), 1);
//! ```

pub mod lookup;
pub mod output;
pub mod sector;
pub mod table;
pub mod utils;

pub use lookup::{CodeInput, SicLookup};
pub use sector::{Sector, SectorMap};
pub use table::{SicEntry, SicTable};

/// Sector for a SIC code using the built-in data
pub fn classify_sector<'a>(code: impl Into<CodeInput<'a>>) -> Option<&'static str> {
    SicLookup::builtin().classify_sector(code)
}

/// Office and industry entries for a SIC code using the built-in table
pub fn lookup_details<'a>(code: impl Into<CodeInput<'a>>) -> Vec<SicEntry> {
    SicLookup::builtin().lookup_details(code)
}

/// Prefixes of a built-in sector; empty if the sector is unknown
pub fn prefixes_for_sector(name: &str) -> Vec<String> {
    SicLookup::builtin().prefixes_for_sector(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_classify() {
        assert_eq!(classify_sector(3571), Some("Technology"));
        assert_eq!(classify_sector(2834), Some("Healthcare"));
        assert_eq!(classify_sector(2830), Some("Healthcare"));
        assert_eq!(classify_sector(3845), Some("Healthcare"));
        assert_eq!(classify_sector("6021"), Some("Financials"));
        assert_eq!(classify_sector(1311), Some("Energy"));
        assert_eq!(classify_sector(" 1311 "), Some("Energy"));
        assert_eq!(classify_sector(12), Some("Energy"));
        assert_eq!(classify_sector(357), Some("Technology"));
        assert_eq!(classify_sector("65"), Some("Real Estate"));
        assert_eq!(classify_sector(35712345), Some("Technology"));
    }

    #[test]
    fn test_builtin_classify_absent() {
        assert_eq!(classify_sector(9999), None);
        assert_eq!(classify_sector(9000), None);
        assert_eq!(classify_sector(4), None);
        assert_eq!(classify_sector(-1234), None);
        assert_eq!(classify_sector("abc"), None);
        assert_eq!(classify_sector(""), None);
    }

    #[test]
    fn test_builtin_shared_prefix_ties() {
        // "37" is declared by Industrials before Consumer Cyclical
        assert_eq!(classify_sector(3711), Some("Industrials"));
        // "48" is declared by Technology before Communication Services
        assert_eq!(classify_sector(4812), Some("Technology"));
        // "27" is declared by Consumer Cyclical before Communication Services
        assert_eq!(classify_sector(2711), Some("Consumer Cyclical"));
        // "15" is declared by Industrials before Real Estate
        assert_eq!(classify_sector(1531), Some("Industrials"));
    }

    #[test]
    fn test_builtin_leading_zeros_are_absorbed() {
        // "0700" normalizes to 700, which matches no "07" prefix
        assert_eq!(classify_sector("0700"), classify_sector(700));
        assert_eq!(classify_sector("0100"), classify_sector("100"));
    }

    #[test]
    fn test_builtin_lookup_details() {
        let crops = lookup_details(100);
        assert_eq!(crops.len(), 1);
        assert_eq!(crops[0].office, "Industrial Applications and Services");
        assert_eq!(crops[0].industry, "AGRICULTURAL PRODUCTION-CROPS");
        assert_eq!(lookup_details("0100"), crops);
        assert_eq!(lookup_details(" 100 "), crops);

        let oil = lookup_details(1311);
        assert_eq!(oil[0].office, "Office of Energy & Transportation");
        assert_eq!(oil[0].industry, "CRUDE PETROLEUM & NATURAL GAS");

        let finance = lookup_details(6199);
        assert_eq!(finance[0].office, "Office of Finance or Office of Crypto Assets");

        let software = lookup_details("7371");
        assert_eq!(software[0].industry, "SERVICES-COMPUTER PROGRAMMING SERVICES");

        let fishing = lookup_details(900);
        assert_eq!(fishing[0].industry, "FISHING, HUNTING AND TRAPPING");
    }

    #[test]
    fn test_builtin_lookup_details_empty() {
        assert!(lookup_details(99999).is_empty());
        assert!(lookup_details(-100).is_empty());
        assert!(lookup_details("abc").is_empty());
        assert!(lookup_details("").is_empty());
    }

    #[test]
    fn test_builtin_prefixes() {
        assert_eq!(
            prefixes_for_sector("Technology"),
            vec!["357", "367", "381", "382", "48", "737"]
        );
        assert_eq!(prefixes_for_sector("Energy"), vec!["12", "13", "29"]);
        assert!(prefixes_for_sector("technology").is_empty());
        assert!(prefixes_for_sector("Health Care").is_empty());
        assert!(prefixes_for_sector("").is_empty());
    }

    #[test]
    fn test_builtin_prefixes_isolated() {
        let mut first = prefixes_for_sector("Utilities");
        first.push("00".to_string());
        assert_eq!(prefixes_for_sector("Utilities"), vec!["49"]);
    }
}
