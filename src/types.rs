//! Core data model types for the ETL pipeline.
//!
//! Both stages move data through an in-memory [`DataSet`]: the Loader builds a
//! *raw* dataset (all fields [`DataType::Utf8`], names taken verbatim from the
//! source file), and the Transformer builds a *typed* dataset (normalized
//! names, one inferred type per column, nulls imputed).

/// Logical data type for a schema field.
///
/// These are exactly the scalar classes of the staging→clean SQL type mapping;
/// see [`DataType::sql_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Calendar timestamp without timezone.
    Timestamp,
    /// UTF-8 string.
    Utf8,
}

impl DataType {
    /// SQL column type used when deriving the clean table schema.
    ///
    /// This mapping is fixed: text stays unconstrained, floats become
    /// arbitrary-precision `numeric` (never an integer type), integers become
    /// `bigint`, timestamps stay `timestamp`.
    pub fn sql_type(&self) -> &'static str {
        match self {
            DataType::Utf8 => "text",
            DataType::Float64 => "numeric",
            DataType::Int64 => "bigint",
            DataType::Timestamp => "timestamp",
        }
    }
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// An ordered list of fields describing the shape of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Create an all-text schema from column names taken verbatim from a
    /// source file. This is the shape of the staging table.
    pub fn all_text<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names
                .into_iter()
                .map(|n| Field::new(n, DataType::Utf8))
                .collect(),
        )
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Calendar timestamp without timezone.
    Timestamp(chrono::NaiveDateTime),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`]
/// fields. Column order and row count are preserved through both pipeline
/// stages; the Transformer only rewrites cell values in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate the cells of one column, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[idx])
    }
}
