#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Every non-header line is either accepted or skipped, never both
    let report = sicx::table::parse_sic_csv(data);
    let rows = data.trim().lines().skip(1).count();
    assert_eq!(report.entries.len() + report.skipped.len(), rows);

    for line in data.lines() {
        let _ = sicx::table::parse::parse_row(line);
    }
});
