//! Error types for the table engine and loader.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while building or rolling on a single table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A die or table was configured with invalid parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An entry range is inverted, out of bounds, or overlaps another entry.
    #[error("invalid range {min}-{max}: {reason}")]
    InvalidRange {
        /// Lower bound of the rejected range.
        min: u32,
        /// Upper bound of the rejected range.
        max: u32,
        /// Why the range was rejected.
        reason: String,
    },

    /// The rolled value falls in a gap no entry covers.
    #[error("no entry in table '{table}' covers roll {value}")]
    NoMatchingEntry {
        /// Name of the table rolled on.
        table: String,
        /// The value that was rolled.
        value: u32,
    },
}

/// Errors that abort a table-set load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source directory does not exist or is not a directory.
    #[error("table directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Reading the directory or a table file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A row in a table file is malformed.
    #[error("parse error in {}: {source}", path.display())]
    Parse {
        /// The offending table file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A row was well-formed but rejected by the table.
    #[error("table error in {}: {source}", path.display())]
    Table {
        /// The offending table file.
        path: PathBuf,
        /// The rejected entry.
        #[source]
        source: TableError,
    },

    /// The loader worker stopped without sending a terminal event.
    #[error("table loader worker exited unexpectedly")]
    WorkerLost,
}
