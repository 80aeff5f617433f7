// src/process/mod.rs
use csv::ReaderBuilder;
use tracing::{debug, trace};

use crate::error::LoadError;

pub mod utils;

/// Headerless sheet contents: every CSV record, as a Vec of Strings (one per field).
/// Records keep their own length; nothing is padded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `(row, col)`, `None` when the record is shorter than `col`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// Parse CSV bytes with no header row. The first record is data like any other.
/// Fails on the first record that is not valid UTF-8.
#[tracing::instrument(level = "debug", skip(data), fields(bytes = data.len()))]
pub fn parse_headerless_csv(data: &[u8]) -> Result<RawTable, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // sheet rows can be ragged at the end
        .from_reader(data);

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|source| LoadError::Csv {
            record: idx,
            source,
        })?;
        trace!(record = idx, fields = record.len(), "parsed record");
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(rows = rows.len(), "parsed headerless CSV");
    Ok(RawTable { rows })
}
