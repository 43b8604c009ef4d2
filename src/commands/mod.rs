//! Command handlers shared by the binary and the integration tests.

mod generate;
mod load;
mod report;

pub use generate::run_generate;
pub use load::run_load;
pub use report::run_report;

use anyhow::Context;
use clap::Args;
use sqlite_loader::{DatabaseArgs, LoadArgs, LoadReport};
use std::path::PathBuf;
use storefront_populate_csv::{CSVPopulateArgs, PopulateMetrics};

/// Arguments for generating and then loading in one go.
#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub generate: CSVPopulateArgs,

    /// SQL DDL script declaring the relational schema
    #[arg(long, default_value = "sql/schema.sql", env = "STOREFRONT_SCHEMA")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Generate the interchange files, then load them.
pub fn run_pipeline(args: RunArgs) -> anyhow::Result<(Vec<PopulateMetrics>, Vec<LoadReport>)> {
    let load_args = LoadArgs {
        data_dir: args.generate.data_dir.clone(),
        schema: args.schema,
        database: args.database,
    };
    let written = run_generate(&args.generate).context("Generation failed")?;
    let loaded = run_load(&load_args).context("Load failed")?;
    Ok((written, loaded))
}
