//! Error types for the SQLite loader.

use csv_types::CsvParseError;
use rusqlite::ffi;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which constraint an insert violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    ForeignKey,
    Unique,
    Other,
}

impl ConstraintKind {
    /// Classify a rusqlite error, or `None` if it is not a constraint failure.
    pub fn of(err: &rusqlite::Error) -> Option<Self> {
        match err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Some(match e.extended_code {
                    ffi::SQLITE_CONSTRAINT_PRIMARYKEY => ConstraintKind::PrimaryKey,
                    ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintKind::ForeignKey,
                    ffi::SQLITE_CONSTRAINT_UNIQUE => ConstraintKind::Unique,
                    _ => ConstraintKind::Other,
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintKind::PrimaryKey => "primary key",
            ConstraintKind::ForeignKey => "foreign key",
            ConstraintKind::Unique => "unique",
            ConstraintKind::Other => "other",
        })
    }
}

/// Errors that can occur while loading interchange files.
///
/// Every variant that arises during a table load names the table, and
/// row-level failures carry the 1-based data row number.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Schema DDL file does not exist.
    #[error("Missing schema at '{}'", path.display())]
    MissingSchema { path: PathBuf },

    /// Schema DDL file exists but could not be read.
    #[error("Failed to read schema at '{}': {source}", path.display())]
    SchemaIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table of the load order is not declared in the store.
    #[error("Missing schema: table '{table}' is not declared in the database")]
    MissingTable { table: &'static str },

    /// The connection refused to enable foreign-key enforcement.
    #[error("Foreign key enforcement could not be enabled on the connection")]
    ForeignKeysDisabled,

    /// IO error reading a file.
    #[error("IO error on '{}' for table '{table}': {source}", path.display())]
    Io {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV.
    #[error("CSV error in '{}' for table '{table}': {source}", path.display())]
    Csv {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Header lacks a declared column.
    #[error("Table '{table}': column '{column}' missing from CSV header")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    /// A cell failed to parse as its declared type.
    #[error("Table '{table}', row {row}, column '{column}': {source}")]
    Cast {
        table: &'static str,
        row: u64,
        column: &'static str,
        #[source]
        source: CsvParseError,
    },

    /// An insert violated a constraint; the table's transaction was rolled back.
    #[error("Table '{table}', row {row}: {kind} constraint violation: {message}")]
    Constraint {
        table: &'static str,
        row: u64,
        kind: ConstraintKind,
        message: String,
    },

    /// Any other SQLite error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl LoaderError {
    /// Wrap an insert error, classifying constraint failures.
    pub(crate) fn from_insert(table: &'static str, row: u64, err: rusqlite::Error) -> Self {
        match ConstraintKind::of(&err) {
            Some(kind) => LoaderError::Constraint {
                table,
                row,
                kind,
                message: err.to_string(),
            },
            None => LoaderError::Sqlite(err),
        }
    }

    /// Constraint kind, if this is a constraint violation.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            LoaderError::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
