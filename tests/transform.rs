use analytics_etl::transform::infer::{infer_column, matches_numeric};
use analytics_etl::transform::{clean_dataset, normalize_name};
use analytics_etl::types::{DataSet, DataType, Schema, Value};
use analytics_etl::EtlError;

fn text(s: &str) -> Value {
    Value::Utf8(s.to_string())
}

fn raw_dataset(columns: Vec<(&str, Vec<Value>)>) -> DataSet {
    let schema = Schema::all_text(columns.iter().map(|(n, _)| n.to_string()));
    let row_count = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
    let rows = (0..row_count)
        .map(|r| columns.iter().map(|(_, col)| col[r].clone()).collect())
        .collect();
    DataSet::new(schema, rows)
}

#[test]
fn normalize_name_fixed_table() {
    let cases = [
        ("Ingresos  Año", "ingresos_ao"),
        ("  Nombre ", "nombre"),
        ("EDAD", "edad"),
        ("Fecha de Corte", "fecha_de_corte"),
        ("Teléfono (móvil)", "telfono_mvil"),
        ("ya_normalizado", "ya_normalizado"),
        ("a - b", "a_b"),
        ("", ""),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize_name(input), expected, "input: {input:?}");
    }
}

#[test]
fn matches_numeric_is_digits_and_periods_only() {
    assert!(matches_numeric("30"));
    assert!(matches_numeric("2.5"));
    assert!(matches_numeric("1.2.3"));
    assert!(!matches_numeric(""));
    assert!(!matches_numeric("-1"));
    assert!(!matches_numeric("1e5"));
    assert!(!matches_numeric("2024-01-01"));
    assert!(!matches_numeric(" 1"));
}

#[test]
fn all_integer_column_infers_int64() {
    let cells = vec![text("1"), text("2"), text("3")];
    let (dt, values) = infer_column(&cells);
    assert_eq!(dt, DataType::Int64);
    assert_eq!(
        values,
        vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)]
    );
}

#[test]
fn mixed_numeric_column_infers_float64() {
    let cells = vec![text("1"), text("2.5"), text("3")];
    let (dt, values) = infer_column(&cells);
    assert_eq!(dt, DataType::Float64);
    assert_eq!(
        values,
        vec![
            Value::Float64(1.0),
            Value::Float64(2.5),
            Value::Float64(3.0)
        ]
    );
}

#[test]
fn a_blank_cell_forces_the_float_class() {
    // Even an all-integer column becomes float once a value is missing.
    let cells = vec![text("1"), Value::Null, text("3")];
    let (dt, values) = infer_column(&cells);
    assert_eq!(dt, DataType::Float64);
    assert_eq!(values[1], Value::Null);
}

#[test]
fn non_numeric_cell_keeps_the_column_text() {
    let cells = vec![text("1"), text("abc")];
    let (dt, values) = infer_column(&cells);
    assert_eq!(dt, DataType::Utf8);
    assert_eq!(values, cells);
}

#[test]
fn all_blank_column_stays_text() {
    let cells = vec![Value::Null, Value::Null];
    let (dt, _) = infer_column(&cells);
    assert_eq!(dt, DataType::Utf8);
}

#[test]
fn numeric_class_cell_failing_parse_becomes_missing() {
    // "1.2.3" passes the digits-and-periods check but not the numeric parse;
    // it must become a missing marker, not an error.
    let cells = vec![text("30"), text("25"), text("1.2.3")];
    let (dt, values) = infer_column(&cells);
    assert_eq!(dt, DataType::Float64);
    assert_eq!(values[2], Value::Null);
}

#[test]
fn clean_dataset_imputes_by_type_class_and_counts_nulls() {
    let raw = raw_dataset(vec![
        ("Nombre", vec![text("Ana"), Value::Null, text("Beto")]),
        ("Edad", vec![text("30"), text("25"), text("3.5.1")]),
    ]);

    let (clean, nulls) = clean_dataset(&raw).unwrap();

    let names: Vec<&str> = clean.schema.field_names().collect();
    assert_eq!(names, vec!["nombre", "edad"]);
    assert_eq!(clean.schema.fields[0].data_type, DataType::Utf8);
    assert_eq!(clean.schema.fields[1].data_type, DataType::Float64);

    assert_eq!(clean.row_count(), 3);
    // Blank name filled with "", unparseable age filled with 0.
    assert_eq!(clean.rows[1][0], Value::Utf8(String::new()));
    assert_eq!(clean.rows[2][1], Value::Float64(0.0));
    // One blank name + one unparseable age.
    assert_eq!(nulls, 2);
}

#[test]
fn clean_dataset_preserves_row_count_and_column_order() {
    let raw = raw_dataset(vec![
        ("B Col", vec![text("x"), Value::Null]),
        ("A Col", vec![text("1"), text("2")]),
    ]);

    let (clean, _) = clean_dataset(&raw).unwrap();
    assert_eq!(clean.row_count(), raw.row_count());
    let names: Vec<&str> = clean.schema.field_names().collect();
    assert_eq!(names, vec!["b_col", "a_col"]);
}

#[test]
fn zero_fill_does_not_feed_back_into_inference() {
    // A text column with blanks must not become numeric because of the fill.
    let raw = raw_dataset(vec![("c", vec![Value::Null, text("abc")])]);
    let (clean, nulls) = clean_dataset(&raw).unwrap();
    assert_eq!(clean.schema.fields[0].data_type, DataType::Utf8);
    assert_eq!(clean.rows[0][0], Value::Utf8(String::new()));
    assert_eq!(nulls, 1);
}

#[test]
fn normalized_name_collision_is_an_error() {
    let raw = raw_dataset(vec![
        ("Nombre", vec![text("a")]),
        ("NOMBRE ", vec![text("b")]),
    ]);

    let err = clean_dataset(&raw).unwrap_err();
    match err {
        EtlError::SchemaMismatch { message } => {
            assert!(message.contains("normalize to 'nombre'"), "{message}");
        }
        other => panic!("expected schema mismatch, got: {other}"),
    }
}

#[test]
fn float_columns_map_to_numeric_never_bigint() {
    assert_eq!(DataType::Float64.sql_type(), "numeric");
    assert_eq!(DataType::Int64.sql_type(), "bigint");
    assert_eq!(DataType::Utf8.sql_type(), "text");
    assert_eq!(DataType::Timestamp.sql_type(), "timestamp");
}
