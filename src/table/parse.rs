//! CSV parsing for the SIC reference table.
//!
//! The reference file has a header row followed by `code,office,industry`
//! rows. Fields containing commas are wrapped in double quotes. Escaped
//! quotes inside a quoted field are not supported (the dataset has none).
//!
//! Like `entry.rs`, this file is also compiled by `build.rs` and must stay
//! free of logging and other runtime-only dependencies. Skipped rows are
//! reported back to the caller instead.

use super::entry::{SicCodeValue, SicEntry};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A field is a run of non-comma, non-quote characters or a quoted span.
const FIELD_PATTERN: &str = r#"(?:[^,"]+|"[^"]*")+"#;

/// Number of fields every data row must split into
pub const FIELD_COUNT: usize = 3;

static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();

fn field_regex() -> &'static Regex {
    FIELD_REGEX.get_or_init(|| Regex::new(FIELD_PATTERN).expect("field pattern is a valid regex"))
}

/// Why a row was left out of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line split into this many fields instead of three
    FieldCount(usize),
    /// The first field is not a non-negative base-10 integer
    InvalidCode(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount(n) => {
                write!(f, "expected {} fields, found {}", FIELD_COUNT, n)
            }
            SkipReason::InvalidCode(code) => write!(f, "invalid SIC code {:?}", code),
        }
    }
}

/// A row that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number; the header is line 1
    pub line_number: usize,
    pub line: String,
    pub reason: SkipReason,
}

/// Result of parsing a whole CSV document
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Accepted rows, in source order
    pub entries: Vec<SicEntry>,
    /// Rejected rows, in source order
    pub skipped: Vec<SkippedRow>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parse the raw CSV text. The first line is always treated as a header.
pub fn parse_sic_csv(raw: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (idx, line) in raw.trim().lines().enumerate().skip(1) {
        match parse_row(line) {
            Ok(entry) => report.entries.push(entry),
            Err(reason) => report.skipped.push(SkippedRow {
                line_number: idx + 1,
                line: line.to_string(),
                reason,
            }),
        }
    }

    report
}

/// Parse a single data row
pub fn parse_row(line: &str) -> Result<SicEntry, SkipReason> {
    let fields = split_fields(line);
    if fields.len() != FIELD_COUNT {
        return Err(SkipReason::FieldCount(fields.len()));
    }

    let code_text = fields[0].trim();
    let sic_code: SicCodeValue = code_text
        .parse()
        .map_err(|_| SkipReason::InvalidCode(code_text.to_string()))?;

    Ok(SicEntry {
        sic_code,
        office: strip_outer_quotes(fields[1].trim()).to_string(),
        industry: strip_outer_quotes(fields[2].trim()).to_string(),
    })
}

/// Split a line on commas that sit outside double quotes.
///
/// Empty fields produce no match, so `a,,b` yields two fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    field_regex().find_iter(line).map(|m| m.as_str()).collect()
}

/// Remove one leading and one trailing `"`, each independently.
fn strip_outer_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}
