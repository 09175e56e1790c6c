//! Error types for jobscope-core.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::mapping::Role;

/// Configuration could not be merged into a valid [`crate::Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading a spreadsheet into a record set.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The file could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file exceeds the configured input size limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Path of the oversized file.
        path: Utf8PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// The file extension is not a supported spreadsheet format.
    #[error("unsupported spreadsheet format: {path} (expected xlsx, xlsm, xlsb, xls, ods, csv or tsv)")]
    UnsupportedFormat {
        /// Path with the unrecognized extension.
        path: Utf8PathBuf,
    },

    /// The workbook could not be opened or decoded.
    #[error("not a readable workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook contains no worksheets.
    #[error("workbook has no worksheets")]
    NoWorksheet,

    /// The delimited text file could not be parsed.
    #[error("malformed delimited file: {0}")]
    Csv(#[from] csv::Error),

    /// The sheet has no header row.
    #[error("spreadsheet is empty (no header row)")]
    EmptySheet,

    /// A data row has more cells than the header has columns.
    #[error("row {row} has {cells} cells but the header has {columns} columns")]
    RaggedRow {
        /// 1-based data row number (header excluded).
        row: usize,
        /// Number of cells in the row.
        cells: usize,
        /// Number of header columns.
        columns: usize,
    },
}

/// Result type alias using [`IngestError`].
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors raised while binding semantic roles to columns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MappingError {
    /// A column named by the user does not exist in the record set.
    #[error("{role} column {name:?} not found. Available: {available}")]
    UnknownColumn {
        /// Role the column was selected for.
        role: Role,
        /// The requested column name.
        name: String,
        /// Comma-separated list of available column names.
        available: String,
    },

    /// A positional default points past the last column.
    #[error("{role} column defaults to index {index}, but the file has only {columns} columns")]
    IndexOutOfRange {
        /// Role whose default binding failed.
        role: Role,
        /// 0-based default column index.
        index: usize,
        /// Number of columns in the record set.
        columns: usize,
    },

    /// A mapping was applied to a record set it was not resolved against.
    #[error("{role} column {name:?} (index {index}) is not present in this record set")]
    NotInRecordSet {
        /// Role whose binding does not match.
        role: Role,
        /// Bound column name.
        name: String,
        /// Bound 0-based column index.
        index: usize,
    },
}

/// Result type alias using [`MappingError`].
pub type MappingResult<T> = Result<T, MappingError>;

/// Any failure that prevents a report from being produced.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The spreadsheet could not be ingested.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The column mapping could not be resolved.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Result type alias using [`ReportError`].
pub type ReportResult<T> = Result<T, ReportError>;
