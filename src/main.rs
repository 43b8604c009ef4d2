//! Command-line interface for storefront-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate the default dataset (15 customers, 12 products, 30 orders, seed 42)
//! storefront-seed generate --data-dir data
//!
//! # Generate from a YAML config, overriding the seed
//! storefront-seed generate --config storefront.yaml --seed 7
//!
//! # Load the interchange files into SQLite
//! storefront-seed load --data-dir data --schema sql/schema.sql --db data/ecommerce.db
//!
//! # Both steps at once
//! storefront-seed run
//!
//! # Revenue report as JSON
//! storefront-seed report --limit 5
//! ```
//!
//! Logging honours `RUST_LOG` and defaults to `info`.

use clap::{Parser, Subcommand};
use sqlite_loader::{LoadArgs, LoadReport, ReportArgs};
use storefront_populate_csv::{CSVPopulateArgs, PopulateMetrics};
use storefront_seed::{run_generate, run_load, run_pipeline, run_report, RunArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "storefront-seed")]
#[command(about = "Generate a synthetic storefront dataset and load it into SQLite")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the interchange CSV files
    Generate {
        #[command(flatten)]
        args: CSVPopulateArgs,
    },

    /// Load interchange CSV files into a SQLite database
    Load {
        #[command(flatten)]
        args: LoadArgs,
    },

    /// Generate then load
    Run {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Print the top products by captured revenue as JSON
    Report {
        #[command(flatten)]
        args: ReportArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let written = run_generate(&args)?;
            print_written(&written);
        }
        Commands::Load { args } => {
            let loaded = run_load(&args)?;
            print_loaded(&loaded);
        }
        Commands::Run { args } => {
            let (written, loaded) = run_pipeline(args)?;
            print_written(&written);
            print_loaded(&loaded);
        }
        Commands::Report { args } => {
            let rows = run_report(&args)?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

fn print_written(metrics: &[PopulateMetrics]) {
    for m in metrics {
        println!("Wrote {} rows to {}", m.rows_written, m.path.display());
    }
}

fn print_loaded(reports: &[LoadReport]) {
    for r in reports {
        println!("Loaded {} rows into {}", r.rows_loaded, r.table);
    }
}
