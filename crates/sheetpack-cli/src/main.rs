//! sheetpack CLI - pack CSV files into an XLSX workbook

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sheetpack::prelude::*;
use sheetpack::MAX_SHEET_NAME_LEN;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetpack")]
#[command(author, version, about = "Pack tabular data into XLSX spreadsheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack one or more CSV files into a workbook, one sheet per file
    Pack {
        /// Input CSV files, in sheet order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output XLSX file
        #[arg(short, long)]
        output: PathBuf,

        /// Sheet name for the input at the same position (default: file stem)
        #[arg(short, long = "name")]
        names: Vec<String>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Write a sample reservation workbook
    Demo {
        /// Output XLSX file
        #[arg(short, long, default_value = "reservations.xlsx")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            inputs,
            output,
            names,
            delimiter,
        } => pack_files(&inputs, &output, &names, delimiter),
        Commands::Demo { output } => write_demo(&output),
    }
}

fn pack_files(inputs: &[PathBuf], output: &Path, names: &[String], delimiter: char) -> Result<()> {
    if names.len() > inputs.len() {
        bail!(
            "{} sheet names given for {} input files",
            names.len(),
            inputs.len()
        );
    }
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }

    let mut workbook = Workbook::new();
    for (i, input) in inputs.iter().enumerate() {
        let name = match names.get(i) {
            Some(name) => name.clone(),
            None => sheet_name_for(input),
        };
        let sheet = read_csv_sheet(input, &name, delimiter as u8)?;
        workbook
            .add_sheet(sheet)
            .with_context(|| format!("Cannot add sheet for '{}'", input.display()))?;
    }

    save(&workbook, output)
}

fn write_demo(output: &Path) -> Result<()> {
    let workbook = demo_workbook().context("Failed to build demo workbook")?;
    save(&workbook, output)
}

fn save(workbook: &Workbook, output: &Path) -> Result<()> {
    workbook
        .save_xlsx(output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    let cells: usize = workbook.sheets().iter().map(Sheet::cell_count).sum();
    eprintln!(
        "Wrote {} sheets ({} cells) to '{}'",
        workbook.sheet_count(),
        cells,
        output.display()
    );
    Ok(())
}

/// Read every record of a CSV file as one row of string cells
fn read_csv_sheet(path: &Path, name: &str, delimiter: u8) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;

    let mut sheet = Sheet::new(name);
    for (line, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("Bad CSV record {} in '{}'", line + 1, path.display()))?;
        sheet.push_row(record.iter());
    }

    Ok(sheet)
}

/// Sheet name derived from a file stem, made acceptable to [`Workbook`]
fn sheet_name_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name: String = stem
        .chars()
        .map(|c| match c {
            ':' | '\\' | '/' | '?' | '*' | '[' | ']' => '_',
            c => c,
        })
        .take(MAX_SHEET_NAME_LEN)
        .collect();

    if name.is_empty() {
        "Sheet".to_string()
    } else {
        name
    }
}

fn demo_workbook() -> sheetpack::Result<Workbook> {
    let mut reservations = Sheet::new("Reservierungen");
    reservations.push_row(["Name", "E-Mail", "Tickets", "Vorstellung", "Datum"]);
    reservations.push_row([
        "Anna Weber",
        "anna@example.org",
        "2",
        "Ein Sommernachtstraum",
        "2026-06-20 19:30",
    ]);
    reservations.push_row([
        "Markus Dietz",
        "markus@example.org",
        "4",
        "Ein Sommernachtstraum",
        "2026-06-20 19:30",
    ]);
    reservations.push_row(["Sofia Klein", "sofia@example.org", "1", "Die Physiker"]);

    let mut events = Sheet::new("Vorstellungen");
    events.push_row(["Titel", "Datum", "Plätze", "Reserviert"]);
    events.push_row(["Ein Sommernachtstraum", "2026-06-20", "280", "126"]);
    events.push_row(["Die Physiker", "2026-09-12", "200", "1"]);

    Workbook::from_sheets([reservations, events])
}
