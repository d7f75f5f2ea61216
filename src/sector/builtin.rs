//! Curated sector map.
//!
//! Grouping follows the Fintel industry overview (https://fintel.io/industry).
//! Some prefixes appear under more than one sector ("15", "27", "37", "48",
//! "78"); the earlier sector in this list wins those ties.

pub(crate) const BUILTIN_SECTORS: &[(&str, &[&str])] = &[
    ("Energy", &["12", "13", "29"]),
    (
        "Basic Materials",
        &["08", "10", "14", "24", "26", "28", "30", "32", "33"],
    ),
    (
        "Industrials",
        &[
            "07", "15", "16", "17", "34", "35", "37", "40", "42", "44", "45", "47", "50", "73",
            "75", "76", "87",
        ],
    ),
    (
        "Consumer Cyclical",
        &[
            "22", "23", "25", "27", "31", "36", "37", "39", "52", "53", "55", "56", "57", "58",
            "59", "70", "72", "78", "79",
        ],
    ),
    (
        "Consumer Defensive",
        &["01", "02", "09", "20", "21", "51", "54"],
    ),
    ("Healthcare", &["283", "384", "385", "512", "591", "80"]),
    ("Financials", &["60", "61", "62", "63", "64", "67"]),
    ("Technology", &["357", "367", "381", "382", "48", "737"]),
    ("Communication Services", &["27", "48", "78"]),
    ("Real Estate", &["15", "65"]),
    ("Utilities", &["49"]),
];
