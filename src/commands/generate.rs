//! Generate command handler.

use anyhow::Context;
use storefront_generator::DataGenerator;
use storefront_populate_csv::{CSVPopulateArgs, CSVPopulator, PopulateMetrics};
use tracing::info;

/// Generate a dataset and write it as interchange files.
pub fn run_generate(args: &CSVPopulateArgs) -> anyhow::Result<Vec<PopulateMetrics>> {
    let config = args
        .generator_config()
        .context("Failed to resolve generator config")?;
    info!("Generator config: {:?}", config);

    let dataset = DataGenerator::new(config)
        .generate()
        .context("Failed to generate dataset")?;

    CSVPopulator::new(&args.data_dir)
        .populate(&dataset)
        .with_context(|| format!("Failed to write interchange files to {:?}", args.data_dir))
}
