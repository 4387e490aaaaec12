//! Per-column type inference and coercion.
//!
//! The inference rule is deliberately narrow: a column is numeric-class only
//! when every non-empty cell consists solely of digits and periods. No sign,
//! no exponent, no thousands separators, no timestamp detection. Downstream
//! consumers depend on this exact classification; do not broaden it.

use crate::types::{DataType, Value};

/// True when a raw cell is made of `[0-9.]` only (and is non-empty).
pub fn matches_numeric(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Infer one column's type and coerce its cells.
///
/// Input cells are raw: `Value::Utf8` (non-empty text) or `Value::Null`.
/// The returned cells are coerced but *not* imputed: missing values (empty
/// cells, and numeric-class cells that still fail numeric parse, e.g.
/// `"1.2.3"`) come back as `Value::Null` so the caller can count them before
/// filling.
///
/// A numeric-class column with no missing cells whose every value parses as
/// `i64` infers [`DataType::Int64`]; any other numeric-class column infers
/// [`DataType::Float64`] (one missing cell is enough to force the float
/// class). Everything else stays [`DataType::Utf8`].
pub fn infer_column(cells: &[Value]) -> (DataType, Vec<Value>) {
    // A column with no non-empty cells stays text.
    let numeric_class = cells.iter().any(|c| !c.is_null())
        && cells.iter().all(|c| match c {
            Value::Null => true,
            Value::Utf8(s) => matches_numeric(s),
            _ => false,
        });
    if !numeric_class {
        return (DataType::Utf8, cells.to_vec());
    }

    let parsed: Vec<Option<f64>> = cells
        .iter()
        .map(|c| match c {
            Value::Utf8(s) => s.parse::<f64>().ok(),
            _ => None,
        })
        .collect();

    let all_int = parsed.iter().all(Option::is_some)
        && cells
            .iter()
            .all(|c| matches!(c, Value::Utf8(s) if s.parse::<i64>().is_ok()));

    if all_int {
        let values = cells
            .iter()
            .map(|c| match c {
                Value::Utf8(s) => Value::Int64(s.parse::<i64>().unwrap_or_default()),
                _ => Value::Null,
            })
            .collect();
        (DataType::Int64, values)
    } else {
        let values = parsed
            .into_iter()
            .map(|p| p.map_or(Value::Null, Value::Float64))
            .collect();
        (DataType::Float64, values)
    }
}
