#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary text must never panic, and a sector is always a known name
    if let Some(sector) = sicx::classify_sector(data) {
        assert!(sicx::SectorMap::builtin().contains(sector));
    }
    for entry in sicx::lookup_details(data) {
        assert!(!sicx::lookup_details(entry.sic_code).is_empty());
    }
});
