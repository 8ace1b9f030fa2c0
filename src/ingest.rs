//! Row ingestion boundary.
//!
//! The core consumes rows one at a time from a [`RowSource`]; streaming
//! mechanics stay on the collaborator's side. [`CsvSource`] adapts
//! CSV-shaped input: a comment-stripping pre-pass, header-keyed rows, and
//! dynamic typing so numeric-looking cells arrive as numbers.

use crate::interface::RawRow;
use async_trait::async_trait;
use serde_json::Value;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Error type for ingestion failures. Terminal for the stream: no further
/// rows arrive after one of these.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not decode input: {0}")]
    Decode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// An external collaborator delivering rows incrementally. `None` signals a
/// clean end of stream; an `Err` item is terminal.
#[async_trait]
pub trait RowSource: Send {
    async fn next_row(&mut self) -> Option<Result<RawRow, IngestError>>;
}

/// Drop blank lines and full-line comments (`#`, `//`, `;` prefixes, with
/// leading whitespace tolerated) before handing the chunk to the CSV parser.
pub fn strip_comments(chunk: &str) -> String {
    chunk
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty()
                && !trimmed.starts_with('#')
                && !trimmed.starts_with("//")
                && !trimmed.starts_with(';')
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dynamic typing for one cell: numeric-looking content becomes a JSON
/// number, empty cells become null, everything else stays a string.
fn dynamic_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() {
            if let Some(number) = serde_json::Number::from_f64(n) {
                return Value::Number(number);
            }
        }
    }
    Value::String(cell.to_string())
}

/// CSV adapter over an in-memory buffer. Rows are decoded lazily so a
/// consumer can cancel a large load partway through.
///
/// Ragged rows are tolerated: extra cells beyond the header count are
/// dropped, and missing cells simply leave their keys absent from the row.
pub struct CsvSource {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<Cursor<String>>,
    failed: bool,
}

impl CsvSource {
    /// Build from raw CSV text. The header row is required; comment and
    /// blank lines are stripped first.
    pub fn from_string(input: &str) -> Result<Self, IngestError> {
        let cleaned = strip_comments(input);
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(Cursor::new(cleaned));
        let headers = reader
            .headers()
            .map_err(|e| IngestError::Decode(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        Ok(Self {
            headers,
            records: reader.into_records(),
            failed: false,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_string(&input)
    }
}

#[async_trait]
impl RowSource for CsvSource {
    async fn next_row(&mut self) -> Option<Result<RawRow, IngestError>> {
        if self.failed {
            return None;
        }
        match self.records.next()? {
            Ok(record) => {
                let mut row = RawRow::new();
                for (header, cell) in self.headers.iter().zip(record.iter()) {
                    row.insert(header.clone(), dynamic_value(cell));
                }
                Some(Ok(row))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(IngestError::Decode(e.to_string())))
            }
        }
    }
}

/// Decode a whole CSV buffer eagerly. Convenience for tests and small
/// inputs; large loads should go through [`CsvSource`] + the store.
pub fn parse_csv_str(input: &str) -> Result<Vec<RawRow>, IngestError> {
    let cleaned = strip_comments(input);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(Cursor::new(cleaned));
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::Decode(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.into_records() {
        let record = record.map_err(|e| IngestError::Decode(e.to_string()))?;
        let mut row = RawRow::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.insert(header.clone(), dynamic_value(cell));
        }
        rows.push(row);
    }
    Ok(rows)
}
