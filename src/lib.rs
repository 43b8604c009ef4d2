//! storefront-seed library
//!
//! Generates a small synthetic storefront dataset, writes it as CSV
//! interchange files, and loads those files into SQLite with foreign keys
//! enforced.
//!
//! # Pipeline
//!
//! ```text
//! GeneratorConfig ──> DataGenerator ──> CSVPopulator ──> *.csv
//!                                                          │
//!                      sql/schema.sql ──> SqliteLoader <───┘ ──> ecommerce.db
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Write data/customers.csv ... data/shipping.csv
//! storefront-seed generate --customers 15 --products 12 --orders 30 --seed 42
//!
//! # Load them into data/ecommerce.db
//! storefront-seed load --schema sql/schema.sql
//!
//! # Top products by captured revenue
//! storefront-seed report --limit 5
//! ```

pub mod commands;

// Re-exports for convenience
pub use sqlite_loader::{LoadReport, LoaderError, ProductRevenue, SqliteLoader};
pub use storefront_core::{TableDefinition, LOAD_ORDER};
pub use storefront_generator::{DataGenerator, Dataset, GeneratorConfig};
pub use storefront_populate_csv::{CSVPopulator, PopulateMetrics};

pub use commands::{run_generate, run_load, run_pipeline, run_report, RunArgs};
