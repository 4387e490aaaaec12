//! `analytics-etl` is a small two-stage ETL pipeline: it ingests a tabular
//! source file (spreadsheet or delimited text) into an all-text PostgreSQL
//! staging table, then derives a schema-inferred, type-coerced clean table
//! from it.
//!
//! ## Stages
//!
//! - **Loader** ([`pipeline::load`]): reads the source file into an in-memory
//!   [`types::DataSet`] with every column typed as text and names kept
//!   verbatim, creates the staging table if absent, truncates it, and
//!   bulk-loads the rows via a streaming `COPY ... FROM STDIN` CSV channel.
//! - **Transformer** ([`pipeline::transform`]): reads the staging table back,
//!   normalizes column names ([`transform::normalize_name`]), infers one
//!   scalar type per column from its text content, fills missing values by
//!   type class (numeric → `0`, text → `""`), then drops and recreates the
//!   clean table and bulk-loads the coerced rows through the same channel.
//!
//! Both stages are synchronous and blocking; they are designed to run as a
//! strict two-step sequence, never concurrently.
//!
//! ## Tables
//!
//! - [`store::STAGING_TABLE`] (`analytics_raw`): all columns `text`, contents
//!   fully replaced per run.
//! - [`store::CLEAN_TABLE`] (`analytics_clean`): normalized names, SQL types
//!   from the fixed mapping in [`types::DataType::sql_type`], dropped and
//!   recreated per run.
//!
//! ## Example
//!
//! ```no_run
//! use analytics_etl::config::StoreConfig;
//! use analytics_etl::pipeline;
//!
//! # fn main() -> Result<(), analytics_etl::EtlError> {
//! let config = StoreConfig::from_env();
//! let ingested = pipeline::load(&config, "ventas.xlsx")?;
//! let report = pipeline::transform(&config)?;
//! println!("ingested={ingested} clean={} nulls={}", report.rows, report.nulls);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: source-file reading into a raw dataset
//! - [`transform`]: name normalization, type inference, null imputation
//! - [`store`]: PostgreSQL DDL, TRUNCATE, streaming COPY, read-back
//! - [`pipeline`]: the two stage drivers
//! - [`config`]: environment-derived connection settings
//! - [`types`]: schema + in-memory dataset types
//! - [`error`]: the shared error taxonomy

pub mod config;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod store;
pub mod transform;
pub mod types;

pub use error::{EtlError, EtlResult};
