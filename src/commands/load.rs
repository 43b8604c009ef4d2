//! Load command handler.

use anyhow::Context;
use sqlite_loader::{LoadArgs, LoadReport, SqliteLoader};

/// Apply the schema and load every interchange file.
///
/// Tables already committed stay committed if a later table fails.
pub fn run_load(args: &LoadArgs) -> anyhow::Result<Vec<LoadReport>> {
    let db_path = &args.database.db_path;
    let mut loader = SqliteLoader::open(db_path)
        .with_context(|| format!("Failed to open database {db_path:?}"))?;

    loader.apply_schema(&args.schema)?;
    let reports = loader.load_all(&args.data_dir)?;
    Ok(reports)
}
