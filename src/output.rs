//! Output formatting for lookup results

use crate::sector::{Sector, SectorMap};
use crate::table::{SicEntry, TableStats};
use serde::Serialize;
use std::io;
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Renders query results as colored text or as pretty JSON
pub struct Printer<W> {
    out: W,
    json: bool,
}

impl Printer<StandardStream> {
    pub fn stdout(choice: ColorChoice, json: bool) -> Self {
        Self::new(StandardStream::stdout(choice), json)
    }
}

#[derive(Serialize)]
struct SectorAnswer<'a> {
    code: &'a str,
    sector: Option<&'a str>,
}

#[derive(Serialize)]
struct DetailsAnswer<'a> {
    code: &'a str,
    entries: &'a [SicEntry],
}

#[derive(Serialize)]
struct PrefixesAnswer<'a> {
    sector: &'a str,
    prefixes: &'a [String],
}

/// Outcome of a `build` run
#[derive(Debug, Serialize)]
pub struct BuildSummary<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub entries: usize,
    pub skipped: usize,
}

impl<W: WriteColor> Printer<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn sector(&mut self, code: &str, sector: Option<&str>) -> io::Result<()> {
        if self.json {
            return self.write_json(&SectorAnswer { code, sector });
        }

        self.code_label(code)?;
        match sector {
            Some(name) => self.highlight(name, Color::Cyan)?,
            None => self.dim("no sector")?,
        }
        writeln!(self.out)
    }

    pub fn details(&mut self, code: &str, entries: &[SicEntry]) -> io::Result<()> {
        if self.json {
            return self.write_json(&DetailsAnswer { code, entries });
        }

        if entries.is_empty() {
            self.code_label(code)?;
            self.dim("no entries")?;
            return writeln!(self.out);
        }

        for entry in entries {
            self.code_label(&entry.sic_code.to_string())?;
            self.highlight(&entry.industry, Color::Cyan)?;
            writeln!(self.out)?;
            write!(self.out, "      ")?;
            self.dim(&entry.office)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    pub fn prefixes(&mut self, sector: &str, prefixes: &[String]) -> io::Result<()> {
        if self.json {
            return self.write_json(&PrefixesAnswer { sector, prefixes });
        }

        self.highlight(sector, Color::Cyan)?;
        write!(self.out, ": ")?;
        if prefixes.is_empty() {
            self.dim("no prefixes")?;
        } else {
            write!(self.out, "{}", prefixes.join(", "))?;
        }
        writeln!(self.out)
    }

    pub fn sectors(&mut self, sectors: &SectorMap) -> io::Result<()> {
        if self.json {
            let all: Vec<&Sector> = sectors.iter().collect();
            return self.write_json(&all);
        }

        for sector in sectors.iter() {
            self.prefixes(&sector.name, &sector.prefixes)?;
        }
        Ok(())
    }

    pub fn stats(&mut self, stats: &TableStats, source: &str) -> io::Result<()> {
        if self.json {
            return self.write_json(stats);
        }

        writeln!(self.out, "Table Statistics")?;
        writeln!(self.out, "================")?;
        writeln!(self.out)?;
        writeln!(self.out, "Source:           {}", source)?;
        writeln!(self.out, "Entries:          {}", stats.entry_count)?;
        writeln!(self.out, "Distinct codes:   {}", stats.distinct_codes)?;
        if !stats.duplicate_codes.is_empty() {
            let dups: Vec<String> = stats.duplicate_codes.iter().map(|c| c.to_string()).collect();
            writeln!(self.out, "Duplicate codes:  {}", dups.join(", "))?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "Entries by office:")?;
        for (office, count) in &stats.offices {
            let office = if office.is_empty() { "(none)" } else { office.as_str() };
            writeln!(self.out, "  {:45} {}", office, count)?;
        }
        Ok(())
    }

    pub fn build_summary(&mut self, summary: &BuildSummary<'_>) -> io::Result<()> {
        if self.json {
            return self.write_json(summary);
        }

        writeln!(
            self.out,
            "Parsed {} entries from {}",
            summary.entries,
            summary.input.display()
        )?;
        if summary.skipped > 0 {
            self.highlight(&format!("Skipped {} malformed rows", summary.skipped), Color::Yellow)?;
            writeln!(self.out)?;
        }
        writeln!(self.out, "Table written to {}", summary.output.display())
    }

    fn code_label(&mut self, code: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(self.out, "{:>5}", code)?;
        self.out.reset()?;
        write!(self.out, " ")
    }

    fn highlight(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn dim(&mut self, text: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_dimmed(true))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn render(
        json: bool,
        f: impl FnOnce(&mut Printer<NoColor<Vec<u8>>>) -> io::Result<()>,
    ) -> String {
        let mut printer = Printer::new(NoColor::new(Vec::new()), json);
        f(&mut printer).unwrap();
        String::from_utf8(printer.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_sector_text() {
        assert_eq!(
            render(false, |p| p.sector("3571", Some("Technology"))),
            " 3571 Technology\n"
        );
        assert_eq!(
            render(false, |p| p.sector("9999", None)),
            " 9999 no sector\n"
        );
    }

    #[test]
    fn test_sector_json() {
        let out = render(true, |p| p.sector("abc", None));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["code"], "abc");
        assert!(value["sector"].is_null());
    }

    #[test]
    fn test_details_text() {
        let entries = vec![SicEntry::new(
            100,
            "Industrial Applications and Services",
            "AGRICULTURAL PRODUCTION-CROPS",
        )];
        let out = render(false, |p| p.details("100", &entries));
        assert_eq!(
            out,
            "  100 AGRICULTURAL PRODUCTION-CROPS\n      Industrial Applications and Services\n"
        );
        assert_eq!(
            render(false, |p| p.details("1", &[])),
            "    1 no entries\n"
        );
    }

    #[test]
    fn test_details_json() {
        let entries = vec![SicEntry::new(6199, "Office of Finance", "FINANCE SERVICES")];
        let out = render(true, |p| p.details("6199", &entries));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["entries"][0]["sicCode"], 6199);
        assert_eq!(value["entries"][0]["industry"], "FINANCE SERVICES");
    }

    #[test]
    fn test_prefixes_text() {
        let prefixes = vec!["357".to_string(), "48".to_string()];
        assert_eq!(
            render(false, |p| p.prefixes("Technology", &prefixes)),
            "Technology: 357, 48\n"
        );
        assert_eq!(
            render(false, |p| p.prefixes("technology", &[])),
            "technology: no prefixes\n"
        );
    }

    #[test]
    fn test_sectors_json_keeps_order() {
        let out = render(true, |p| p.sectors(SectorMap::builtin()));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "Energy");
        assert_eq!(value[10]["name"], "Utilities");
    }

    #[test]
    fn test_stats_text() {
        let stats = TableStats {
            entry_count: 3,
            distinct_codes: 2,
            duplicate_codes: vec![6199],
            offices: vec![("Office of Finance".to_string(), 2), (String::new(), 1)],
        };
        let out = render(false, |p| p.stats(&stats, "builtin"));
        assert!(out.contains("Entries:          3"));
        assert!(out.contains("Duplicate codes:  6199"));
        assert!(out.contains("(none)"));
    }
}
