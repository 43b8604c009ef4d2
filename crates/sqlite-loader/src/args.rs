//! CLI argument definitions for the loader and report.

use clap::Args;
use std::path::PathBuf;

/// Where the database lives.
#[derive(Args, Clone, Debug)]
pub struct DatabaseArgs {
    /// SQLite database file (created if missing)
    #[arg(long = "db", default_value = "data/ecommerce.db", env = "STOREFRONT_DB_PATH")]
    pub db_path: PathBuf,
}

/// Arguments for loading interchange files.
#[derive(Args, Clone, Debug)]
pub struct LoadArgs {
    /// Directory holding the interchange CSV files
    #[arg(long, default_value = "data", env = "STOREFRONT_DATA_DIR")]
    pub data_dir: PathBuf,

    /// SQL DDL script declaring the relational schema
    #[arg(long, default_value = "sql/schema.sql", env = "STOREFRONT_SCHEMA")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Arguments for the revenue report.
#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Number of products to show
    #[arg(long, default_value = "5")]
    pub limit: u32,

    #[command(flatten)]
    pub database: DatabaseArgs,
}
