//! Build script for sicx
//!
//! Parses `data/sic_codes.csv` with the same parser the library exposes and
//! writes the accepted rows to `$OUT_DIR/builtin_table.rs` as a static
//! array, which `src/table/mod.rs` includes.
//!
//! - An unreadable CSV fails the build.
//! - Malformed rows are skipped and reported as cargo warnings.

#![allow(dead_code)]

#[path = "src/table/entry.rs"]
mod entry;
#[path = "src/table/parse.rs"]
mod parse;

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process;

const CSV_PATH: &str = "data/sic_codes.csv";

fn main() {
    println!("cargo:rerun-if-changed={}", CSV_PATH);
    println!("cargo:rerun-if-changed=src/table/entry.rs");
    println!("cargo:rerun-if-changed=src/table/parse.rs");

    let raw = match fs::read_to_string(CSV_PATH) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("error: failed to read {}: {}", CSV_PATH, err);
            process::exit(1);
        }
    };

    let report = parse::parse_sic_csv(&raw);
    for row in &report.skipped {
        println!(
            "cargo:warning={} line {}: {} ({:?})",
            CSV_PATH, row.line_number, row.reason, row.line
        );
    }

    let mut generated = String::new();
    generated.push_str("static BUILTIN_ROWS: &[(u32, &str, &str)] = &[\n");
    for entry in &report.entries {
        // Debug formatting of &str yields an escaped Rust string literal
        let _ = writeln!(
            generated,
            "    ({}, {:?}, {:?}),",
            entry.sic_code, entry.office, entry.industry
        );
    }
    generated.push_str("];\n");

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(err) => {
            eprintln!("error: OUT_DIR not set: {}", err);
            process::exit(1);
        }
    };
    let out_path = out_dir.join("builtin_table.rs");
    if let Err(err) = fs::write(&out_path, generated) {
        eprintln!("error: failed to write {}: {}", out_path.display(), err);
        process::exit(1);
    }
}
