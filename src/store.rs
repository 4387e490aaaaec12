//! Relational store access: DDL, truncation, streaming COPY, and read-back.
//!
//! Both tables are written through `COPY <table> (<cols>) FROM STDIN WITH
//! (FORMAT csv, HEADER true)`: a single streaming, header-bearing,
//! delimited-text channel per load. Row-by-row INSERTs are deliberately not
//! used anywhere. The client is blocking and scoped to one pipeline stage;
//! dropping the [`Store`] releases the connection on every exit path.

use postgres::error::SqlState;
use postgres::{Client, NoTls};

use crate::config::StoreConfig;
use crate::error::{EtlError, EtlResult};
use crate::types::{DataSet, Schema, Value};

/// Fixed name of the all-text staging table.
pub const STAGING_TABLE: &str = "analytics_raw";
/// Fixed name of the typed clean table.
pub const CLEAN_TABLE: &str = "analytics_clean";

/// A connected store client, scoped to a single pipeline stage.
pub struct Store {
    client: Client,
}

impl Store {
    /// Connect using the supplied configuration.
    ///
    /// Missing credentials or an unparseable port surface here, not earlier.
    pub fn connect(config: &StoreConfig) -> EtlResult<Self> {
        let port: u16 = config.port.parse().map_err(|_| EtlError::Connection {
            message: format!("invalid port '{}'", config.port),
        })?;

        let mut pg = postgres::Config::new();
        pg.host(&config.host);
        pg.port(port);
        if let Some(dbname) = &config.dbname {
            pg.dbname(dbname);
        }
        if let Some(user) = &config.user {
            pg.user(user);
        }
        if let Some(password) = &config.password {
            pg.password(password);
        }

        log::info!("connecting to {}:{}", config.host, config.port);
        let client = pg.connect(NoTls).map_err(|e| EtlError::Connection {
            message: e.to_string(),
        })?;
        Ok(Self { client })
    }

    /// Execute an arbitrary SQL statement against the store.
    pub fn batch_execute(&mut self, sql: &str) -> EtlResult<()> {
        self.client.batch_execute(sql)?;
        Ok(())
    }

    /// Create the staging table if it does not exist, all columns `text`.
    ///
    /// A pre-existing table is left untouched (`CREATE TABLE IF NOT EXISTS`
    /// is a no-op) and no migration is attempted: its column set must match
    /// the dataset's verbatim names exactly, in order, or the load fails as a
    /// schema mismatch before anything is truncated. Extra, missing, and
    /// renamed columns all count as a mismatch.
    pub fn create_staging_if_absent(&mut self, schema: &Schema) -> EtlResult<()> {
        self.client.batch_execute(&staging_ddl(STAGING_TABLE, schema))?;

        let sql = format!("SELECT * FROM {}", quote_ident(STAGING_TABLE));
        let stmt = self.client.prepare(&sql)?;
        let existing: Vec<&str> = stmt.columns().iter().map(|c| c.name()).collect();
        let expected: Vec<&str> = schema.field_names().collect();
        if existing != expected {
            return Err(EtlError::SchemaMismatch {
                message: format!(
                    "staging table '{STAGING_TABLE}' has columns {existing:?}, \
                     the source has {expected:?}"
                ),
            });
        }
        Ok(())
    }

    /// Remove all rows from the staging table.
    pub fn truncate_staging(&mut self) -> EtlResult<()> {
        self.client
            .batch_execute(&format!("TRUNCATE {}", quote_ident(STAGING_TABLE)))?;
        Ok(())
    }

    /// Read the staging table back into a raw all-text dataset.
    ///
    /// SQL NULLs and empty strings both come back as [`Value::Null`].
    pub fn read_staging(&mut self) -> EtlResult<DataSet> {
        let sql = format!("SELECT * FROM {}", quote_ident(STAGING_TABLE));
        let stmt = self.client.prepare(&sql)?;
        let schema = Schema::all_text(stmt.columns().iter().map(|c| c.name()));

        let mut rows: Vec<Vec<Value>> = Vec::new();
        for row in self.client.query(&stmt, &[])? {
            let mut out = Vec::with_capacity(schema.len());
            for i in 0..schema.len() {
                let cell = match row.try_get::<_, Option<String>>(i)? {
                    Some(s) if !s.is_empty() => Value::Utf8(s),
                    _ => Value::Null,
                };
                out.push(cell);
            }
            rows.push(out);
        }
        Ok(DataSet::new(schema, rows))
    }

    /// Drop and recreate the clean table for the dataset's schema, then bulk
    /// load it. Returns the number of rows written.
    ///
    /// There is no two-phase safety here: a crash between the drop and the
    /// load leaves no clean table behind, and the next successful run rebuilds
    /// it from staging.
    pub fn replace_clean(&mut self, dataset: &DataSet) -> EtlResult<usize> {
        self.client
            .batch_execute(&format!("DROP TABLE IF EXISTS {}", quote_ident(CLEAN_TABLE)))?;
        self.client
            .batch_execute(&clean_ddl(CLEAN_TABLE, &dataset.schema))?;
        self.copy_dataset(CLEAN_TABLE, dataset)
    }

    /// Bulk-load a dataset into `table` through the streaming COPY channel.
    ///
    /// The dataset is serialized as CSV (header first) straight into the copy
    /// sink; no per-row statements are issued. At-most-once semantics: a
    /// failure mid-transfer leaves the table in an unspecified state for this
    /// run and propagates to the caller.
    pub fn copy_dataset(&mut self, table: &str, dataset: &DataSet) -> EtlResult<usize> {
        log::info!("writing {} rows to {}", dataset.row_count(), table);

        let stmt = copy_statement(table, &dataset.schema);
        let sink = self
            .client
            .copy_in(&stmt)
            .map_err(|e| classify_copy_error(table, e))?;

        let mut wtr = csv::Writer::from_writer(sink);
        wtr.write_record(dataset.schema.field_names())
            .map_err(|e| bulk_error(table, &e))?;
        for row in &dataset.rows {
            wtr.write_record(row.iter().map(csv_field))
                .map_err(|e| bulk_error(table, &e))?;
        }
        let sink = wtr.into_inner().map_err(|e| bulk_error(table, e.error()))?;

        let written = sink.finish().map_err(|e| classify_copy_error(table, e))?;
        Ok(written as usize)
    }
}

/// `CREATE TABLE IF NOT EXISTS` statement for the all-text staging table,
/// column names taken verbatim from the raw schema.
pub fn staging_ddl(table: &str, schema: &Schema) -> String {
    let cols: Vec<String> = schema
        .field_names()
        .map(|n| format!("{} text", quote_ident(n)))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_ident(table),
        cols.join(", ")
    )
}

/// `CREATE TABLE` statement for the clean table: normalized names with the
/// fixed type mapping of [`crate::types::DataType::sql_type`].
pub fn clean_ddl(table: &str, schema: &Schema) -> String {
    let cols: Vec<String> = schema
        .fields
        .iter()
        .map(|f| format!("{} {}", quote_ident(&f.name), f.data_type.sql_type()))
        .collect();
    format!("CREATE TABLE {} ({})", quote_ident(table), cols.join(", "))
}

/// `COPY ... FROM STDIN` statement for the streaming CSV channel.
pub fn copy_statement(table: &str, schema: &Schema) -> String {
    let cols: Vec<String> = schema.field_names().map(quote_ident).collect();
    format!(
        "COPY {} ({}) FROM STDIN WITH (FORMAT csv, HEADER true)",
        quote_ident(table),
        cols.join(", ")
    )
}

/// Double-quote an SQL identifier, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn csv_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Int64(i) => i.to_string(),
        Value::Float64(f) => f.to_string(),
        Value::Timestamp(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        Value::Utf8(s) => s.clone(),
    }
}

/// Map a COPY failure to the pipeline taxonomy. A missing/undefined column or
/// a malformed copy row means the target table's shape does not match the
/// dataset (stale staging table from a prior run); anything else is a plain
/// transfer failure.
fn classify_copy_error(table: &str, err: postgres::Error) -> EtlError {
    let code = err.code();
    if code == Some(&SqlState::UNDEFINED_COLUMN) || code == Some(&SqlState::BAD_COPY_FILE_FORMAT) {
        EtlError::SchemaMismatch {
            message: format!("table '{table}' does not match the dataset shape: {err}"),
        }
    } else {
        bulk_error(table, &err)
    }
}

fn bulk_error(table: &str, err: &dyn std::fmt::Display) -> EtlError {
    EtlError::BulkTransfer {
        table: table.to_string(),
        message: err.to_string(),
    }
}
