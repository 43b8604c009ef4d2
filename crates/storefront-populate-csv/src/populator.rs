//! CSV populator for the interchange files.

use crate::error::CSVPopulatorError;
use csv::Writer;
use csv_types::record_to_csv_fields;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use storefront_core::Record;
use storefront_generator::Dataset;
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from writing one interchange file.
#[derive(Debug, Clone)]
pub struct PopulateMetrics {
    /// Table the file belongs to.
    pub table: &'static str,
    /// Path of the written file.
    pub path: PathBuf,
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes a dataset as one CSV file per table.
pub struct CSVPopulator {
    output_dir: PathBuf,
}

impl CSVPopulator {
    /// Create a new CSV populator writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write every collection of the dataset.
    ///
    /// The output directory is created if needed. Files are written in
    /// load order and an existing file is overwritten.
    pub fn populate(&self, dataset: &Dataset) -> Result<Vec<PopulateMetrics>, CSVPopulatorError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| CSVPopulatorError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let metrics = vec![
            self.write(&dataset.customers)?,
            self.write(&dataset.products)?,
            self.write(&dataset.orders)?,
            self.write(&dataset.payments)?,
            self.write(&dataset.shipments)?,
        ];

        info!(
            "Datasets generated in '{}' ({} files)",
            self.output_dir.display(),
            metrics.len()
        );
        Ok(metrics)
    }

    fn write<R: Record>(&self, records: &[R]) -> Result<PopulateMetrics, CSVPopulatorError> {
        let path = self.output_dir.join(R::TABLE.file_name);
        write_records(&path, records)
    }
}

/// Write `records` to `path` as CSV, header row first.
///
/// The loader locates columns by header name, so the header is always written.
pub fn write_records<R: Record>(
    path: &Path,
    records: &[R],
) -> Result<PopulateMetrics, CSVPopulatorError> {
    let start_time = Instant::now();
    let table = R::TABLE;
    let io_err = |source| CSVPopulatorError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source| CSVPopulatorError::Csv {
        table: table.name,
        source,
    };

    info!(
        "Writing CSV file '{}' with {} rows for table '{}'",
        path.display(),
        records.len(),
        table.name
    );

    let file = File::create(path).map_err(io_err)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    writer.write_record(table.column_names()).map_err(csv_err)?;

    let mut rows_written = 0u64;
    for record in records {
        if let Some(column) = record.layout_mismatch() {
            return Err(CSVPopulatorError::SchemaMismatch {
                table: table.name,
                column,
            });
        }
        writer
            .write_record(record_to_csv_fields(record))
            .map_err(csv_err)?;
        rows_written += 1;
    }

    writer.flush().map_err(io_err)?;
    drop(writer);

    let metrics = PopulateMetrics {
        table: table.name,
        path: path.to_path_buf(),
        rows_written,
        file_size_bytes: fs::metadata(path).map_err(io_err)?.len(),
        total_duration: start_time.elapsed(),
    };

    debug!(
        "CSV write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use storefront_core::{Customer, LoyaltyTier, LOAD_ORDER};
    use storefront_generator::{DataGenerator, GeneratorConfig};
    use tempfile::TempDir;

    fn dataset() -> Dataset {
        DataGenerator::new(GeneratorConfig::default())
            .generate()
            .unwrap()
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            table: "orders",
            path: PathBuf::from("orders.csv"),
            rows_written: 1000,
            file_size_bytes: 100000,
            total_duration: Duration::from_secs(10),
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
    }

    #[test]
    fn test_populate_writes_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let metrics = CSVPopulator::new(temp_dir.path()).populate(&dataset()).unwrap();

        let tables: Vec<_> = metrics.iter().map(|m| m.table).collect();
        assert_eq!(tables, vec!["customers", "products", "orders", "payments", "shipping"]);

        let content = fs::read_to_string(temp_dir.path().join("customers.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 16); // 1 header + 15 data rows
        assert_eq!(
            lines[0],
            "customer_id,first_name,last_name,email,phone,loyalty_tier,created_at"
        );
        assert!(lines[1].starts_with("1,"));
    }

    #[test]
    fn test_populate_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        CSVPopulator::new(&nested).populate(&dataset()).unwrap();
        assert!(nested.join("shipping.csv").exists());
    }

    #[test]
    fn test_every_file_starts_with_its_header() {
        let temp_dir = TempDir::new().unwrap();
        let metrics = CSVPopulator::new(temp_dir.path()).populate(&dataset()).unwrap();

        for (table, m) in LOAD_ORDER.iter().zip(&metrics) {
            let content = fs::read_to_string(&m.path).unwrap();
            let mut lines = content.lines();
            assert_eq!(lines.next(), Some(table.column_names().join(",").as_str()));
            assert_eq!(lines.count() as u64, m.rows_written);
        }
    }

    #[test]
    fn test_empty_collection_still_has_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("customers.csv");
        let metrics = write_records::<Customer>(&path, &[]).unwrap();

        assert_eq!(metrics.rows_written, 0);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_field_with_delimiter_is_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("customers.csv");
        let customer = Customer {
            customer_id: 1,
            first_name: "Lee, Jr".to_string(),
            last_name: "Kim".to_string(),
            email: "lee.kim1@example.com".to_string(),
            phone: "+1-555-100-1000".to_string(),
            loyalty_tier: LoyaltyTier::Gold,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(5, 0, 0)
                .unwrap(),
        };

        write_records(&path, &[customer]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("1,\"Lee, Jr\",Kim,"));
    }

    #[test]
    fn test_unwritable_target_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let result = CSVPopulator::new(&blocker).populate(&dataset());
        assert!(matches!(result, Err(CSVPopulatorError::Io { .. })));
    }

    #[test]
    fn test_deterministic_generation() {
        let temp_dir = TempDir::new().unwrap();
        let dir1 = temp_dir.path().join("one");
        let dir2 = temp_dir.path().join("two");

        CSVPopulator::new(&dir1).populate(&dataset()).unwrap();
        CSVPopulator::new(&dir2).populate(&dataset()).unwrap();

        for table in LOAD_ORDER {
            let file = table.file_name;
            let content1 = fs::read(dir1.join(file)).unwrap();
            let content2 = fs::read(dir2.join(file)).unwrap();
            assert_eq!(content1, content2, "{file} differs");
        }
    }
}
