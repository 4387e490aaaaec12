use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use analytics_etl::ingestion::excel::read_first_sheet;
use analytics_etl::types::{DataType, Value};
use rust_xlsxwriter::Workbook;

fn tmp_xlsx(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("analytics-etl-{name}-{nanos}.xlsx"))
}

#[test]
fn reads_first_sheet_only() {
    let path = tmp_xlsx("two-sheets");
    let mut wb = Workbook::new();

    let ws = wb.add_worksheet();
    ws.set_name("ventas").unwrap();
    ws.write_string(0, 0, "Nombre").unwrap();
    ws.write_string(0, 1, "Edad").unwrap();
    ws.write_string(1, 0, "Ana").unwrap();
    ws.write_number(1, 1, 30).unwrap();

    // A second sheet with a different shape must be silently ignored.
    let ws2 = wb.add_worksheet();
    ws2.set_name("otros").unwrap();
    ws2.write_string(0, 0, "ignorado").unwrap();
    ws2.write_string(1, 0, "x").unwrap();

    wb.save(&path).unwrap();
    let ds = read_first_sheet(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let names: Vec<&str> = ds.schema.field_names().collect();
    assert_eq!(names, vec!["Nombre", "Edad"]);
    assert_eq!(ds.row_count(), 1);
    assert_eq!(ds.rows[0][0], Value::Utf8("Ana".to_string()));
    // Numeric cells land as their text rendering; the staging table is all text.
    assert_eq!(ds.rows[0][1], Value::Utf8("30".to_string()));
    assert!(ds
        .schema
        .fields
        .iter()
        .all(|f| f.data_type == DataType::Utf8));
}

#[test]
fn empty_cells_become_null() {
    let path = tmp_xlsx("holes");
    let mut wb = Workbook::new();

    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "a").unwrap();
    ws.write_string(0, 1, "b").unwrap();
    ws.write_string(1, 0, "x").unwrap();
    // (1,1) left empty
    ws.write_string(2, 1, "y").unwrap();
    // (2,0) left empty

    wb.save(&path).unwrap();
    let ds = read_first_sheet(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.rows[0][1], Value::Null);
    assert_eq!(ds.rows[1][0], Value::Null);
}

#[test]
fn header_is_first_non_empty_row() {
    let path = tmp_xlsx("offset-header");
    let mut wb = Workbook::new();

    let ws = wb.add_worksheet();
    // Row 0 entirely empty; header on row 1.
    ws.write_string(1, 0, "col").unwrap();
    ws.write_string(2, 0, "v").unwrap();

    wb.save(&path).unwrap();
    let ds = read_first_sheet(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let names: Vec<&str> = ds.schema.field_names().collect();
    assert_eq!(names, vec!["col"]);
    assert_eq!(ds.row_count(), 1);
}

#[test]
fn errors_on_workbook_with_empty_sheet() {
    let path = tmp_xlsx("empty");
    let mut wb = Workbook::new();
    wb.add_worksheet();
    wb.save(&path).unwrap();

    let err = read_first_sheet(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(err.to_string().contains("no header row"), "{err}");
}
