//! Data generator for the storefront-seed pipeline.
//!
//! This crate produces a self-consistent synthetic storefront dataset:
//! customers, products, orders, and one payment plus one shipment per
//! order. All randomness flows from a single seeded RNG that is passed
//! explicitly to every builder, so identical seeds give identical output.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig { customers, products, orders, seed }
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - config       │
//! │  - rng (StdRng) │
//! └────────┬────────┘
//!          │  generate_customers ─┐
//!          │  generate_products ──┼─> generate_orders
//!          ▼                      │
//!    Dataset { customers, products, orders, payments, shipments }
//! ```
//!
//! # Example
//!
//! ```rust
//! use storefront_generator::{DataGenerator, GeneratorConfig};
//!
//! let mut generator = DataGenerator::new(GeneratorConfig::default());
//! let dataset = generator.generate().unwrap();
//! assert_eq!(dataset.payments.len(), dataset.orders.len());
//! ```

pub mod entities;
pub mod generator;
pub mod generators;
pub mod weighted;

// Re-exports for convenience
pub use entities::{generate_customers, generate_orders, generate_products, OrderLedger};
pub use generator::{DataGenerator, Dataset, GeneratorConfig, GeneratorError};
pub use weighted::WeightedChoice;
