use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type EtlResult<T> = Result<T, EtlError>;

/// Error type shared by both pipeline stages.
///
/// `Io`/`Csv`/`Excel`/`Source` cover source-file reads; the remaining variants
/// cover the relational store. Nothing is retried: every error propagates to
/// the caller, which terminates the run with a non-zero exit.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet read error.
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// Malformed source data (e.g. a workbook with no sheets or no header row).
    #[error("source error: {message}")]
    Source { message: String },

    /// The store is unreachable or the supplied credentials are invalid.
    #[error("connection error: {message}")]
    Connection { message: String },

    /// Table shape conflicts with the dataset being written, or two source
    /// columns collide after name normalization.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// Failure on the streaming COPY channel.
    #[error("bulk transfer into '{table}' failed: {message}")]
    BulkTransfer { table: String, message: String },

    /// Any other statement failure (DDL, TRUNCATE, read-back SELECT).
    #[error("sql error: {0}")]
    Sql(#[from] postgres::Error),
}
