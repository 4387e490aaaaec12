//! In-memory transform: name normalization, type inference, null imputation.
//!
//! [`clean_dataset`] takes the raw staging dataset and produces the typed
//! dataset that backs the clean table, plus the number of cells that were
//! missing before imputation (the run's data-quality signal). Row count and
//! column order are preserved; only names and cell values change.

pub mod infer;
pub mod normalize;

pub use normalize::normalize_name;

use std::collections::HashMap;

use crate::error::{EtlError, EtlResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Transform a raw all-text dataset into its typed, imputed form.
///
/// Returns the clean dataset and the total count of missing values prior to
/// imputation, summed across all columns. Missing means an empty/NULL cell,
/// or a cell of a numeric-class column that failed numeric parse.
///
/// Two distinct raw columns normalizing to the same name is an error; the
/// clean table cannot carry duplicate column names and silently dropping one
/// would break the column-cardinality invariant.
pub fn clean_dataset(raw: &DataSet) -> EtlResult<(DataSet, u64)> {
    let normalized = normalized_names(&raw.schema)?;

    let mut fields = Vec::with_capacity(raw.schema.len());
    let mut columns: Vec<Vec<Value>> = Vec::with_capacity(raw.schema.len());
    let mut nulls: u64 = 0;

    for (idx, name) in normalized.into_iter().enumerate() {
        let cells: Vec<Value> = raw.column(idx).cloned().collect();
        let (data_type, mut coerced) = infer::infer_column(&cells);

        // Count before filling so the zero-fill never hides a missing value.
        nulls += coerced.iter().filter(|v| v.is_null()).count() as u64;
        for value in &mut coerced {
            if value.is_null() {
                *value = fill_value(data_type);
            }
        }

        fields.push(Field::new(name, data_type));
        columns.push(coerced);
    }

    let rows = (0..raw.row_count())
        .map(|r| columns.iter().map(|col| col[r].clone()).collect())
        .collect();

    Ok((DataSet::new(Schema::new(fields), rows), nulls))
}

/// Type-appropriate default used to fill a missing cell.
fn fill_value(data_type: DataType) -> Value {
    match data_type {
        DataType::Int64 => Value::Int64(0),
        DataType::Float64 => Value::Float64(0.0),
        _ => Value::Utf8(String::new()),
    }
}

fn normalized_names(schema: &Schema) -> EtlResult<Vec<String>> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut names = Vec::with_capacity(schema.len());

    for field in &schema.fields {
        let name = normalize_name(&field.name);
        if let Some(first) = seen.insert(name.clone(), &field.name) {
            return Err(EtlError::SchemaMismatch {
                message: format!(
                    "columns '{first}' and '{raw}' both normalize to '{name}'",
                    raw = field.name
                ),
            });
        }
        names.push(name);
    }
    Ok(names)
}
