//! Interchange file writer.
//!
//! This crate serialises a generated [`Dataset`](storefront_generator::Dataset)
//! into one header-plus-rows CSV file per entity, using the column layouts
//! declared in `storefront-core`.
//!
//! # Example
//!
//! ```ignore
//! use storefront_generator::{DataGenerator, GeneratorConfig};
//! use storefront_populate_csv::CSVPopulator;
//!
//! let dataset = DataGenerator::new(GeneratorConfig::default()).generate()?;
//! let metrics = CSVPopulator::new("data").populate(&dataset)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::CSVPopulateArgs;
pub use error::CSVPopulatorError;
pub use populator::{write_records, CSVPopulator, PopulateMetrics};
