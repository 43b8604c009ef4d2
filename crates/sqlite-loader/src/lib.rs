//! Typed CSV-to-SQLite loader.
//!
//! This crate materialises the interchange files into a SQLite database:
//!
//! 1. the schema DDL is applied (a missing file is a pre-flight error),
//! 2. every table of the load order is checked to be declared,
//! 3. each file is read, every cell cast to its declared column type,
//! 4. the rows of one table are inserted in one transaction and committed.
//!
//! Foreign-key enforcement is switched on for the lifetime of the
//! connection, so a dangling reference aborts the table that contains it.
//!
//! # Example
//!
//! ```ignore
//! use sqlite_loader::SqliteLoader;
//!
//! let mut loader = SqliteLoader::open("data/ecommerce.db")?;
//! loader.apply_schema("sql/schema.sql")?;
//! for report in loader.load_all("data")? {
//!     println!("Loaded {} rows into {}", report.rows_loaded, report.table);
//! }
//! ```

pub mod args;
mod error;
mod loader;
mod reader;
pub mod report;

pub use args::{DatabaseArgs, LoadArgs, ReportArgs};
pub use error::{ConstraintKind, LoaderError};
pub use loader::{LoadReport, SqliteLoader};
pub use reader::read_table;
pub use report::{top_products_by_revenue, ProductRevenue};
