//! Delimited text (CSV) adapter
//!
//! Reading follows the spreadsheet-export conventions seen in practice:
//! a number of junk lines may precede the header, empty cells are missing
//! values, and repeated header names are disambiguated with a `.N` suffix.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::domain::{Dataset, Table};
use crate::{Result, TableError};

const UTF8_BOM: &str = "\u{feff}";

/// Options controlling how a delimited file is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Raw lines to drop before the header line
    pub skip_rows: usize,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            skip_rows: 0,
            delimiter: b',',
        }
    }
}

impl ReadOptions {
    pub fn skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// First `limit` raw lines of a file, for deciding how many rows to skip
pub fn preview_lines(path: impl AsRef<Path>, limit: usize) -> Result<Vec<String>> {
    let bytes = fs::read(path.as_ref())?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text
        .trim_start_matches(UTF8_BOM)
        .lines()
        .take(limit)
        .map(str::to_string)
        .collect())
}

/// Read a delimited file into a dataset
pub fn read_csv(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        TableError::encoding(format!("{} is not valid UTF-8", path.display())).with_source(e)
    })?;

    let dataset = parse_csv(&text, options)?;
    debug!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "read delimited file"
    );
    Ok(dataset)
}

/// Parse delimited text into a dataset
pub fn parse_csv(text: &str, options: &ReadOptions) -> Result<Dataset> {
    let body = skip_lines(text.trim_start_matches(UTF8_BOM), options.skip_rows);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = dedupe_headers(reader.headers()?.iter());
    let width = headers.len();
    let mut dataset = Dataset::new(headers);

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > width {
            return Err(TableError::schema(format!(
                "row {} has {} fields, header has {}",
                idx + 1,
                record.len(),
                width
            )));
        }

        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|field| (!field.is_empty()).then(|| field.to_string()))
            .collect();
        row.resize(width, None);
        dataset.push_row(row)?;
    }

    Ok(dataset)
}

/// Write a table as CSV to any writer
pub fn write_table_to<W: Write>(writer: W, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a table as a CSV file
pub fn write_table(path: impl AsRef<Path>, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path)?;
    write_table_to(file, table)?;
    debug!(path = %path.display(), rows = table.len(), "wrote table");
    Ok(())
}

fn skip_lines(text: &str, count: usize) -> &str {
    let mut rest = text;
    for _ in 0..count {
        match rest.find('\n') {
            Some(idx) => rest = &rest[idx + 1..],
            None => return "",
        }
    }
    rest
}

fn dedupe_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut headers = Vec::new();

    for (idx, name) in raw.enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}
