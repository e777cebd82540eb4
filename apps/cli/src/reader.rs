//! Spreadsheet readers turning files into raw cell rows.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;
use vocab_core::CellValue;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("unsupported file type: {0}")]
    Unsupported(String),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error code given to CSV/TSV cells that are not valid UTF-8.
const INVALID_UTF8: &str = "invalid UTF-8";

/// Read every row of the first sheet (or the whole CSV/JSON file).
pub fn read_rows(path: &Path) -> Result<Vec<Vec<CellValue>>, ReaderError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let rows = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(path)?,
        "csv" => read_delimited(path, b',')?,
        "tsv" => read_delimited(path, b'\t')?,
        "json" => read_json(path)?,
        other => return Err(ReaderError::Unsupported(other.to_string())),
    };

    tracing::debug!(path = %path.display(), rows = rows.len(), "read spreadsheet");
    Ok(rows)
}

fn read_workbook(path: &Path) -> Result<Vec<Vec<CellValue>>, ReaderError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ReaderError::NoWorksheet)??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect())
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

fn read_delimited(path: &Path, delimiter: u8) -> Result<Vec<Vec<CellValue>>, ReaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    // Byte records, so a badly encoded cell fails its own row only.
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(record.iter().map(cell_from_field).collect());
    }
    Ok(rows)
}

fn cell_from_field(field: &[u8]) -> CellValue {
    match std::str::from_utf8(field) {
        Ok("") => CellValue::Empty,
        Ok(text) => CellValue::Text(text.to_string()),
        Err(_) => CellValue::Error(INVALID_UTF8.to_string()),
    }
}

/// A JSON array of rows, each an array of strings, numbers, booleans or nulls.
fn read_json(path: &Path) -> Result<Vec<Vec<CellValue>>, ReaderError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
