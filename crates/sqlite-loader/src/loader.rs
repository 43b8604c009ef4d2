//! SQLite loader for the interchange files.
//!
//! Each table is its own transactional unit: a failure rolls back the
//! table being loaded, while tables committed before it stay committed.

use crate::error::LoaderError;
use crate::reader::read_table;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection};
use rust_decimal::prelude::ToPrimitive;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use storefront_core::{ColumnType, TableDefinition, Value, LOAD_ORDER};
use tracing::{debug, info};

/// Outcome of loading one table.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Table name.
    pub table: &'static str,
    /// Rows inserted and committed.
    pub rows_loaded: u64,
    /// Time spent reading, casting and inserting.
    pub duration: Duration,
}

/// Loads interchange files into a SQLite database with foreign keys enforced.
///
/// The connection is closed when the loader is dropped.
pub struct SqliteLoader {
    conn: Connection,
}

impl SqliteLoader {
    /// Open (or create) a database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!("Opened SQLite database at '{}'", path.display());
        Ok(Self {
            conn: enable_foreign_keys(conn)?,
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> Result<Self, LoaderError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: enable_foreign_keys(conn)?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Execute the DDL script at `schema_path`.
    ///
    /// Fails with [`LoaderError::MissingSchema`] before touching the
    /// database if the file does not exist.
    pub fn apply_schema(&self, schema_path: impl AsRef<Path>) -> Result<(), LoaderError> {
        let schema_path = schema_path.as_ref();
        if !schema_path.is_file() {
            return Err(LoaderError::MissingSchema {
                path: schema_path.to_path_buf(),
            });
        }
        let sql = fs::read_to_string(schema_path).map_err(|source| LoaderError::SchemaIo {
            path: schema_path.to_path_buf(),
            source,
        })?;

        info!("Applying schema from '{}'", schema_path.display());
        self.conn.execute_batch(&sql)?;
        Ok(())
    }

    /// Check that every table of the load order is declared.
    pub fn verify_schema(&self) -> Result<(), LoaderError> {
        for table in LOAD_ORDER {
            let declared: i64 = self.conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table.name],
                |row| row.get(0),
            )?;
            if declared == 0 {
                return Err(LoaderError::MissingTable { table: table.name });
            }
        }
        Ok(())
    }

    /// Load one interchange file into its table inside a single transaction.
    ///
    /// All rows are read and cast before the transaction begins, so a cast
    /// failure never reaches the database.
    pub fn load_table(
        &mut self,
        table: &'static TableDefinition,
        csv_path: impl AsRef<Path>,
    ) -> Result<LoadReport, LoaderError> {
        let start_time = Instant::now();
        let csv_path = csv_path.as_ref();

        let rows = read_table(table, csv_path)?;
        let sql_rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| to_sql_row(table, i as u64 + 1, row))
            .collect::<Result<Vec<_>, _>>()?;

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&table.insert_sql())?;
            for (i, row) in sql_rows.iter().enumerate() {
                stmt.execute(params_from_iter(row.iter()))
                    .map_err(|e| LoaderError::from_insert(table.name, i as u64 + 1, e))?;
            }
        }
        tx.commit()?;

        let report = LoadReport {
            table: table.name,
            rows_loaded: sql_rows.len() as u64,
            duration: start_time.elapsed(),
        };
        debug!(
            "Loaded {} rows into {} in {:?}",
            report.rows_loaded, report.table, report.duration
        );
        Ok(report)
    }

    /// Load every table from `data_dir`, parents before children.
    ///
    /// Verifies the schema first; no file is opened if a table is missing.
    /// Stops at the first failing table.
    pub fn load_all(&mut self, data_dir: impl AsRef<Path>) -> Result<Vec<LoadReport>, LoaderError> {
        let data_dir = data_dir.as_ref();
        self.verify_schema()?;

        LOAD_ORDER
            .into_iter()
            .map(|table| self.load_table(table, data_dir.join(table.file_name)))
            .collect()
    }

    /// Number of rows currently in `table`.
    pub fn row_count(&self, table: &TableDefinition) -> Result<u64, LoaderError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.name);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

/// Turn on foreign-key enforcement and confirm it took effect.
fn enable_foreign_keys(conn: Connection) -> Result<Connection, LoaderError> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    let enabled: i64 = conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?;
    if enabled != 1 {
        return Err(LoaderError::ForeignKeysDisabled);
    }
    Ok(conn)
}

fn to_sql_row(
    table: &'static TableDefinition,
    row: u64,
    values: Vec<Value>,
) -> Result<Vec<SqlValue>, LoaderError> {
    table
        .columns
        .iter()
        .zip(values)
        .map(|(column, value)| match value {
            Value::Integer(i) => Ok(SqlValue::Integer(i)),
            Value::Real(d) => d.to_f64().map(SqlValue::Real).ok_or_else(|| LoaderError::Cast {
                table: table.name,
                row,
                column: column.name,
                source: csv_types::CsvParseError {
                    message: "Out of range for REAL".to_string(),
                    value: d.to_string(),
                    expected_type: ColumnType::Real,
                },
            }),
            Value::Text(s) => Ok(SqlValue::Text(s)),
        })
        .collect()
}
