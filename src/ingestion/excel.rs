//! Spreadsheet ingestion into a raw dataset.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{EtlError, EtlResult};
use crate::types::{DataSet, Schema, Value};

/// Read the first sheet of a workbook (`.xlsx`, `.xls`, `.ods`, ...) into a
/// raw all-text [`DataSet`]. Any further sheets are silently ignored.
///
/// Behavior:
/// - The first non-empty row of the sheet is the header row; header cells are
///   stringified (numeric headers become their decimal text).
/// - Data cells are stringified verbatim into text; empty cells become
///   [`Value::Null`].
pub fn read_first_sheet(path: impl AsRef<Path>) -> EtlResult<DataSet> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| EtlError::Source {
            message: "workbook has no sheets".to_string(),
        })?;
    let range = workbook.worksheet_range(&sheet)?;

    read_sheet_range(&range)
}

fn read_sheet_range(range: &calamine::Range<Data>) -> EtlResult<DataSet> {
    let mut header_row_idx: Option<usize> = None;
    let mut header_cells: Vec<String> = Vec::new();

    for (idx0, row) in range.rows().enumerate() {
        if row.iter().any(|c| !matches!(c, Data::Empty)) {
            header_row_idx = Some(idx0);
            header_cells = row.iter().map(cell_to_header_string).collect();
            break;
        }
    }
    let header_row_idx = header_row_idx.ok_or_else(|| EtlError::Source {
        message: "sheet has no non-empty rows (no header row found)".to_string(),
    })?;

    let schema = Schema::all_text(header_cells);

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (idx0, row) in range.rows().enumerate() {
        if idx0 <= header_row_idx {
            continue;
        }
        let out_row = (0..schema.len())
            .map(|col| raw_cell(row.get(col).unwrap_or(&Data::Empty)))
            .collect();
        rows.push(out_row);
    }

    Ok(DataSet::new(schema, rows))
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(f) => f.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => "".to_string(),
    }
}

fn raw_cell(c: &Data) -> Value {
    match c {
        Data::Empty => Value::Null,
        Data::String(s) if s.is_empty() => Value::Null,
        Data::String(s) => Value::Utf8(s.clone()),
        other => Value::Utf8(other.to_string()),
    }
}
