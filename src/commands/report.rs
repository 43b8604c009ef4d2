//! Report command handler.

use anyhow::Context;
use sqlite_loader::{top_products_by_revenue, ProductRevenue, ReportArgs, SqliteLoader};

/// Run the revenue report against an existing database.
pub fn run_report(args: &ReportArgs) -> anyhow::Result<Vec<ProductRevenue>> {
    let db_path = &args.database.db_path;
    anyhow::ensure!(db_path.is_file(), "Database {db_path:?} does not exist; run `load` first");

    let loader = SqliteLoader::open(db_path)
        .with_context(|| format!("Failed to open database {db_path:?}"))?;
    loader.verify_schema()?;
    let rows = top_products_by_revenue(loader.connection(), args.limit)?;
    Ok(rows)
}
