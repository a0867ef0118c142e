//! Site Issues Report CLI
//!
//! Reads a spreadsheet export of site compliance issues and writes a Markdown
//! summary. With no arguments it uses the fixed default input and output paths.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use xlsxissues::{ReportBuilder, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_NAME};

/// Convert a site issues spreadsheet into a Markdown report
#[derive(Parser, Debug)]
#[command(name = "site-issues-report")]
#[command(about = "Convert a site issues spreadsheet into a Markdown report", long_about = None)]
#[command(version)]
struct Args {
    /// Spreadsheet export to read (XLS, XLSX, XLSB, ODS)
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Markdown file to write (overwritten if present)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let source_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_SOURCE_NAME.to_string());

    let generator = ReportBuilder::new().with_source_name(source_name).build()?;

    let summary = generator
        .write_report(&args.input, &args.output)
        .with_context(|| format!("Failed to write report to {}", args.output.display()))?;

    println!("Written to: {}", summary.output_path.display());
    println!("Total lines: {}", summary.line_count);

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
