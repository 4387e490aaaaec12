//! Source-file ingestion into a raw, all-text [`crate::types::DataSet`].
//!
//! Callers use [`read_source`], which detects the format from the file
//! extension: spreadsheet extensions go through [`excel`], everything else is
//! read as delimited text through [`csv`] (and may fail at parse time if it
//! is not). Raw datasets keep every column name verbatim and every cell as
//! text; empty cells become [`crate::types::Value::Null`].

pub mod csv;
pub mod excel;

use std::path::Path;

use crate::error::EtlResult;
use crate::types::DataSet;

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Spreadsheet/workbook (`.xlsx`, `.xls`, `.xlsm`, `.xlsb`, `.ods`).
    Spreadsheet,
    /// Delimited text with a header row.
    DelimitedText,
}

impl SourceFormat {
    /// Detect the source format from a file extension (case-insensitive).
    ///
    /// Unknown extensions fall back to [`SourceFormat::DelimitedText`]; the
    /// read then fails at parse time if the content is not delimited text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("xlsx" | "xls" | "xlsm" | "xlsb" | "ods") => Self::Spreadsheet,
            _ => Self::DelimitedText,
        }
    }
}

/// Read a source file into a raw all-text dataset.
pub fn read_source(path: impl AsRef<Path>) -> EtlResult<DataSet> {
    let path = path.as_ref();
    match SourceFormat::from_path(path) {
        SourceFormat::Spreadsheet => excel::read_first_sheet(path),
        SourceFormat::DelimitedText => csv::read_delimited(path),
    }
}
