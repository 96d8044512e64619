//! SpreadCombine CLI
//!
//! Command-line tool for combining CSV files and exporting the result as
//! delimited text or as an xlsx workbook.

use clap::{Parser, Subcommand};
use sc_core::{combine, encode_workbook, read_raw_files, save_to_path, ExportOutcome};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sc-cli")]
#[command(about = "Combine CSV files into one document", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine input files and export the result
    Combine {
        /// Input files, in selection order
        #[arg(short, long, required = true)]
        input: Vec<PathBuf>,

        /// Collapse duplicate rows and merge files sharing a header
        #[arg(short, long)]
        dedupe: bool,

        /// Destination for the combined CSV export
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Destination for the xlsx workbook export
        #[arg(short, long)]
        xlsx: Option<PathBuf>,

        /// Stdout format when no destination is given (csv or json)
        #[arg(long, conflicts_with_all = ["output", "xlsx"])]
        format: Option<String>,
    },

    /// Show the groups a combine run would produce
    Inspect {
        /// Input files, in selection order
        #[arg(short, long, required = true)]
        input: Vec<PathBuf>,

        /// Collapse duplicate rows and merge files sharing a header
        #[arg(short, long)]
        dedupe: bool,

        /// Maximum number of rows to display per group
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> sc_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Combine {
            input,
            dedupe,
            output,
            xlsx,
            format,
        } => cmd_combine(&input, dedupe, output.as_deref(), xlsx.as_deref(), format.as_deref()),
        Commands::Inspect {
            input,
            dedupe,
            limit,
        } => cmd_inspect(&input, dedupe, limit),
    }
}

fn cmd_combine(
    inputs: &[PathBuf],
    dedupe: bool,
    output: Option<&std::path::Path>,
    xlsx: Option<&std::path::Path>,
    format: Option<&str>,
) -> sc_core::Result<()> {
    let files = read_raw_files(inputs)?;
    let document = combine(&files, dedupe)?;

    eprintln!(
        "Combined {} file(s) into {} group(s), {} row(s)",
        files.len(),
        document.group_count(),
        document.row_count()
    );

    if output.is_none() && xlsx.is_none() {
        let format = format.unwrap_or("csv");
        match format.to_lowercase().as_str() {
            "csv" => println!("{}", document.text()),
            "json" => println!("{}", serde_json::to_string_pretty(&document)?),
            _ => {
                eprintln!("Unknown format: {}. Supported formats: csv, json", format);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    if let Some(path) = output {
        report_outcome("CSV", &save_to_path(document.text().as_bytes(), path));
    }

    if let Some(path) = xlsx {
        // A workbook encode failure leaves the CSV export untouched
        match encode_workbook(&document.text()) {
            Ok(buffer) => report_outcome("XLSX", &save_to_path(&buffer, path)),
            Err(e) => eprintln!("XLSX export failed: {}", e),
        }
    }

    Ok(())
}

fn report_outcome(label: &str, outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::Saved {
            file_path,
            folder_path,
        } => {
            println!("{} saved to {}", label, file_path.display());
            println!("{} folder: {}", label, folder_path.display());
        }
        ExportOutcome::Cancelled => println!("{} export cancelled", label),
        ExportOutcome::Failed { message } => eprintln!("{} export failed: {}", label, message),
    }
}

fn cmd_inspect(inputs: &[PathBuf], dedupe: bool, limit: usize) -> sc_core::Result<()> {
    let files = read_raw_files(inputs)?;
    let document = combine(&files, dedupe)?;

    if document.is_empty() {
        println!("No groups (inputs had no data rows)");
        return Ok(());
    }

    println!(
        "{} group(s), {} row(s) total",
        document.group_count(),
        document.row_count()
    );
    println!();

    for (i, group) in document.groups.iter().enumerate() {
        println!("Group {}: {} ({} rows)", i + 1, group.header, group.row_count());

        for row in group.rows.iter().take(limit) {
            println!("  {}", row);
        }

        if group.rows.len() > limit {
            println!("  ... ({} more rows)", group.rows.len() - limit);
        }

        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_rejected_alongside_destination() {
        let result = Cli::try_parse_from([
            "sc-cli", "combine", "--input", "a.csv", "--format", "json", "--output", "out.csv",
        ]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "sc-cli", "combine", "--input", "a.csv", "--format", "json", "--xlsx", "out.xlsx",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_allowed_for_stdout_dump() {
        let result = Cli::try_parse_from([
            "sc-cli", "combine", "--input", "a.csv", "--format", "json",
        ]);
        assert!(result.is_ok());
    }
}
