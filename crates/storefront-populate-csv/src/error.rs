//! Error types for the CSV populator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing interchange files.
#[derive(Error, Debug)]
pub enum CSVPopulatorError {
    /// IO error on a specific path.
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV error.
    #[error("CSV error writing table '{table}': {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A record does not fit its table layout.
    #[error("Record for table '{table}' does not match column '{column}'")]
    SchemaMismatch {
        table: &'static str,
        column: &'static str,
    },
}
