//! Main data generator for producing a complete storefront dataset.

use crate::entities::{generate_customers, generate_orders, generate_products, OrderLedger};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use storefront_core::{Customer, Order, Payment, Product, Shipment};
use tracing::{debug, info};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A weight table failed validation
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Orders were requested but there is nothing to reference
    #[error("Cannot generate orders without {0}")]
    EmptyPool(&'static str),

    /// Error reading a config file
    #[error("Failed to read generator config: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Generation parameters.
///
/// Can be loaded from YAML; absent keys fall back to the defaults.
///
/// ```yaml
/// customers: 15
/// products: 12
/// orders: 30
/// seed: 42
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customers: 15,
            products: 12,
            orders: 30,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, GeneratorError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

/// The five generated collections of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
    pub shipments: Vec<Shipment>,
}

/// Data generator that produces a deterministic dataset.
///
/// The generator owns a seeded random number generator and hands it to the
/// entity builders in a fixed order (customers, products, orders), so the
/// same seed and counts always produce the same dataset.
pub struct DataGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl DataGenerator {
    /// Create a new data generator with the given config.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Generate the full dataset.
    pub fn generate(&mut self) -> Result<Dataset, GeneratorError> {
        let GeneratorConfig {
            customers,
            products,
            orders,
            seed,
        } = self.config;
        info!(
            "Generating {} customers, {} products, {} orders (seed {})",
            customers, products, orders, seed
        );

        let customers = generate_customers(&mut self.rng, customers);
        debug!("Generated {} customers", customers.len());

        let products = generate_products(&mut self.rng, products);
        debug!("Generated {} products", products.len());

        let OrderLedger {
            orders,
            payments,
            shipments,
        } = generate_orders(&mut self.rng, orders, &customers, &products)?;
        debug!(
            "Generated {} orders, {} payments, {} shipments",
            orders.len(),
            payments.len(),
            shipments.len()
        );

        Ok(Dataset {
            customers,
            products,
            orders,
            payments,
            shipments,
        })
    }
}
