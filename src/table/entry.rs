//! Row type shared by the library and the build script.
//!
//! This file is compiled twice: once as `sicx::table::entry` and once
//! directly by `build.rs`, so it must only depend on `serde`.

use serde::{Deserialize, Serialize};

/// A numeric SIC code as stored in the reference table.
pub type SicCodeValue = u32;

/// One row of the SIC reference table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SicEntry {
    #[serde(rename = "sicCode")]
    pub sic_code: SicCodeValue,
    pub office: String,
    pub industry: String,
}

impl SicEntry {
    pub fn new(
        sic_code: SicCodeValue,
        office: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            sic_code,
            office: office.into(),
            industry: industry.into(),
        }
    }
}
