//! The two pipeline stages.
//!
//! [`load`] is stage one (source file → staging table); [`transform`] is stage
//! two (staging table → clean table). They run strictly sequentially, each as
//! a single blocking unit of work with its own store connection. Running them
//! concurrently against the same tables is unsupported.

use std::path::Path;

use crate::config::StoreConfig;
use crate::error::EtlResult;
use crate::ingestion;
use crate::store::{Store, STAGING_TABLE};
use crate::transform::clean_dataset;

/// Outcome of a [`transform`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformReport {
    /// Rows written to the clean table.
    pub rows: usize,
    /// Cells that were missing before imputation, summed across all columns.
    pub nulls: u64,
}

/// Stage one: read a source file and fully replace the staging table with it.
///
/// Creates the staging table if absent (all columns text, names verbatim),
/// truncates it, and bulk-loads the file through the streaming COPY channel.
/// Returns the number of rows written. A stale staging table with a different
/// column set is not migrated; the load fails with a schema-mismatch error
/// before anything is truncated or written.
pub fn load(config: &StoreConfig, source: impl AsRef<Path>) -> EtlResult<usize> {
    let raw = ingestion::read_source(source)?;

    let mut store = Store::connect(config)?;
    store.create_staging_if_absent(&raw.schema)?;
    store.truncate_staging()?;
    store.copy_dataset(STAGING_TABLE, &raw)
}

/// Stage two: derive the clean table from the staging table.
///
/// Reads the staging table back, normalizes column names, infers per-column
/// types, imputes missing values, then drops and recreates the clean table
/// and bulk-loads the coerced dataset. Returns the row count and the total
/// number of values that were missing before imputation.
pub fn transform(config: &StoreConfig) -> EtlResult<TransformReport> {
    let mut store = Store::connect(config)?;
    let raw = store.read_staging()?;

    let (clean, nulls) = clean_dataset(&raw)?;
    let rows = store.replace_clean(&clean)?;

    Ok(TransformReport { rows, nulls })
}
