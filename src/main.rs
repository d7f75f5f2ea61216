use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sicx::output::{BuildSummary, Printer};
use sicx::table::{build_table, write_table, SicTable, TableStats};
use sicx::utils::{get_default_table_path, AppConfig};
use sicx::SicLookup;
use std::fs;
use std::path::{Path, PathBuf};
use termcolor::{ColorChoice, WriteColor};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sicx")]
#[command(about = "Look up SIC codes: sector, office and industry title")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON table to query instead of the configured or built-in one
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// JSON sector map to use instead of the configured or built-in one
    #[arg(long, global = true)]
    sectors: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a SIC code into a business sector
    Sector {
        /// SIC code (leading zeros and surrounding spaces are ignored)
        #[arg(allow_negative_numbers = true)]
        code: String,
    },
    /// Show office and industry title for a SIC code
    Details {
        /// SIC code
        #[arg(allow_negative_numbers = true)]
        code: String,
    },
    /// List the SIC prefixes of a sector (case-sensitive)
    Prefixes {
        /// Sector name, e.g. "Technology"
        sector: String,
    },
    /// List all sectors and their prefixes
    Sectors,
    /// Show table statistics
    Stats,
    /// Parse a SIC CSV file into a JSON table
    Build {
        /// CSV with a header row and `code,office,industry` rows
        #[arg(short, long, default_value = "data/sic_codes.csv")]
        input: PathBuf,

        /// Destination (defaults to the app data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Record the output as the active table in the config
        #[arg(long = "use")]
        activate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        command,
        table,
        sectors,
        json,
        color,
    } = Cli::parse();
    let mut printer = Printer::stdout(color.into(), json);

    if let Commands::Build {
        input,
        output,
        activate,
    } = command
    {
        return run_build(&mut printer, &input, output, activate);
    }

    let config = AppConfig::load()?;
    let table_path = table.or(config.table_path);
    let sector_path = sectors.or(config.sector_map_path);
    debug!(table = ?table_path, sectors = ?sector_path, "resolved data sources");

    let lookup = SicLookup::from_sources(table_path.as_deref(), sector_path.as_deref())?;

    match command {
        Commands::Sector { code } => {
            printer.sector(&code, lookup.classify_sector(&code))?;
        }
        Commands::Details { code } => {
            printer.details(&code, &lookup.lookup_details(&code))?;
        }
        Commands::Prefixes { sector } => {
            printer.prefixes(&sector, &lookup.prefixes_for_sector(&sector))?;
        }
        Commands::Sectors => {
            printer.sectors(lookup.sectors())?;
        }
        Commands::Stats => {
            let source = table_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string());
            printer.stats(&TableStats::compute(lookup.table()), &source)?;
        }
        Commands::Build { .. } => unreachable!("build is dispatched before loading data"),
    }

    Ok(())
}

/// Parse a CSV file and persist the table. An unreadable input is fatal;
/// malformed rows are only counted and logged.
fn run_build<W: WriteColor>(
    printer: &mut Printer<W>,
    input: &Path,
    output: Option<PathBuf>,
    activate: bool,
) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read SIC CSV {}", input.display()))?;

    let report = build_table(&raw);
    let skipped = report.skipped.len();
    let table = SicTable::from(report);

    let output = match output {
        Some(path) => path,
        None => get_default_table_path()?,
    };
    write_table(&output, &table)?;

    if activate {
        let mut config = AppConfig::load()?;
        config.table_path = Some(output.canonicalize().unwrap_or_else(|_| output.clone()));
        config.save()?;
    }

    printer.build_summary(&BuildSummary {
        input,
        output: &output,
        entries: table.len(),
        skipped,
    })?;
    Ok(())
}
