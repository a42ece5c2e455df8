use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::{debug, info, warn};

/// Header and data rows of a loaded table.
///
/// Every row has exactly as many cells as there are headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl IngestOptions {
    /// Options for a single-byte delimiter given as text, e.g. from the command line.
    pub fn with_delimiter(delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {delimiter:?}");
        }
        Ok(Self {
            delimiter: delimiter as u8,
        })
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    read_csv_table_with_options(path, IngestOptions::default())
}

pub fn read_csv_table_with_options(path: &Path, options: IngestOptions) -> Result<CsvTable> {
    let file =
        std::fs::File::open(path).with_context(|| format!("open table: {}", path.display()))?;
    let table =
        read_table(file, options).with_context(|| format!("read table: {}", path.display()))?;
    info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "table loaded"
    );
    Ok(table)
}

fn read_table<R: Read>(source: R, options: IngestOptions) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(source);

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let number = index + 1;
        let record = result.with_context(|| format!("read record {number}"))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        match headers.as_ref().map(Vec::len) {
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(width) => rows.push(fit_row(row, width, number)),
        }
    }

    Ok(CsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

fn fit_row(mut row: Vec<String>, width: usize, record: usize) -> Vec<String> {
    if row.len() > width {
        let extra = row[width..].iter().filter(|cell| !cell.is_empty()).count();
        if extra > 0 {
            warn!(record, extra, "row has more cells than the header, extra cells ignored");
        }
        row.truncate(width);
    } else if row.len() < width {
        debug!(record, cells = row.len(), "short row padded");
        row.resize(width, String::new());
    }
    row
}
