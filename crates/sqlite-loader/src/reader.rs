//! Typed reading of interchange files.
//!
//! Columns are located by header name, so the file's column order does not
//! have to match the table definition; every declared column must be
//! present, extra columns are ignored.

use crate::error::LoaderError;
use csv_types::csv_string_to_value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use storefront_core::{TableDefinition, Value};
use tracing::debug;

/// Buffer size for reading interchange files.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Read and cast every row of `path` according to `table`.
///
/// Rows come back with values in the table's column order. The first cast
/// failure aborts the read.
pub fn read_table(
    table: &'static TableDefinition,
    path: &Path,
) -> Result<Vec<Vec<Value>>, LoaderError> {
    let csv_err = |source| LoaderError::Csv {
        table: table.name,
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| LoaderError::Io {
        table: table.name,
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file));

    let headers = reader.headers().map_err(csv_err)?.clone();
    let positions = table
        .columns
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|h| h == column.name)
                .ok_or(LoaderError::MissingColumn {
                    table: table.name,
                    column: column.name,
                })
        })
        .collect::<Result<Vec<usize>, _>>()?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(csv_err)?;
        let row_number = i as u64 + 1;

        let row = table
            .columns
            .iter()
            .zip(&positions)
            .map(|(column, &pos)| {
                // Record length equals header length; the csv reader rejects ragged rows.
                let cell = record.get(pos).unwrap_or_default();
                csv_string_to_value(cell, column.column_type).map_err(|source| LoaderError::Cast {
                    table: table.name,
                    row: row_number,
                    column: column.name,
                    source,
                })
            })
            .collect::<Result<Vec<Value>, _>>()?;
        rows.push(row);
    }

    debug!("Read {} rows from '{}'", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::fs;
    use storefront_core::{ColumnType, PRODUCTS};
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("products.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_casts_by_declared_type() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "product_id,product_name,category,unit_price,stock_qty,active\n\
             1,Home Item 1,Home,24.5,17,true\n",
        );

        let rows = read_table(&PRODUCTS, &path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], Value::Integer(1));
        assert_eq!(rows[0][3], Value::Real(Decimal::new(245, 1)));
        assert_eq!(rows[0][4].column_type(), ColumnType::Integer);
        assert_eq!(rows[0][5], Value::text("true"));
    }

    #[test]
    fn test_columns_located_by_header_name() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "active,product_id,stock_qty,unit_price,category,product_name,note\n\
             false,3,20,10.00,Toys,Toys Item 3,ignored\n",
        );

        let rows = read_table(&PRODUCTS, &path).unwrap();
        assert_eq!(rows[0][0], Value::Integer(3));
        assert_eq!(rows[0][1], Value::text("Toys Item 3"));
        assert_eq!(rows[0][5], Value::text("false"));
    }

    #[test]
    fn test_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "product_id,product_name\n1,x\n");

        let err = read_table(&PRODUCTS, &path).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::MissingColumn { table: "products", column: "category" }
        ));
    }

    #[test]
    fn test_cast_failure_names_row_and_column() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "product_id,product_name,category,unit_price,stock_qty,active\n\
             1,A,Home,1.00,5,true\n\
             2,B,Home,cheap,5,true\n",
        );

        match read_table(&PRODUCTS, &path).unwrap_err() {
            LoaderError::Cast { table, row, column, .. } => {
                assert_eq!(table, "products");
                assert_eq!(row, 2);
                assert_eq!(column, "unit_price");
            }
            other => panic!("expected cast error, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "product_id,product_name,category,unit_price,stock_qty,active\n1,A,Home\n",
        );

        assert!(matches!(
            read_table(&PRODUCTS, &path),
            Err(LoaderError::Csv { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_table(&PRODUCTS, &dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { table: "products", .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
