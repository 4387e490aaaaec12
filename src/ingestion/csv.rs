//! Delimited-text ingestion into a raw dataset.

use std::path::Path;

use crate::error::EtlResult;
use crate::types::{DataSet, Schema, Value};

/// Read a delimited-text file into a raw all-text [`DataSet`].
///
/// Rules:
///
/// - The file must have a header row; header names are kept verbatim.
/// - Cell values are kept verbatim (no trimming, no parsing).
/// - Empty cells become [`Value::Null`].
pub fn read_delimited(path: impl AsRef<Path>) -> EtlResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    read_from_reader(&mut rdr)
}

/// Read delimited data from an existing CSV reader.
pub fn read_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> EtlResult<DataSet> {
    let headers = rdr.headers()?.clone();
    let schema = Schema::all_text(headers.iter());

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = (0..schema.len())
            .map(|i| raw_cell(record.get(i).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(DataSet::new(schema, rows))
}

fn raw_cell(raw: &str) -> Value {
    if raw.is_empty() {
        Value::Null
    } else {
        Value::Utf8(raw.to_owned())
    }
}
