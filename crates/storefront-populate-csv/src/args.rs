//! CLI argument definitions for the CSV populator.

use clap::Args;
use std::path::PathBuf;
use storefront_generator::{GeneratorConfig, GeneratorError};

/// Arguments for generating the interchange files.
///
/// Counts and seed given on the command line (or via environment) override
/// values from the optional YAML config file, which in turn override the
/// built-in defaults.
#[derive(Args, Clone, Debug)]
pub struct CSVPopulateArgs {
    /// Output directory for CSV files (one file per table)
    #[arg(long, short = 'o', default_value = "data", env = "STOREFRONT_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Path to a YAML generator config (customers, products, orders, seed)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of customers to generate
    #[arg(long)]
    pub customers: Option<usize>,

    /// Number of products to generate
    #[arg(long)]
    pub products: Option<usize>,

    /// Number of orders to generate (each gets one payment and one shipment)
    #[arg(long)]
    pub orders: Option<usize>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "STOREFRONT_SEED")]
    pub seed: Option<u64>,
}

impl CSVPopulateArgs {
    /// Resolve the effective generator config.
    pub fn generator_config(&self) -> Result<GeneratorConfig, GeneratorError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(customers) = self.customers {
            config.customers = customers;
        }
        if let Some(products) = self.products {
            config.products = products;
        }
        if let Some(orders) = self.orders {
            config.orders = orders;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}
