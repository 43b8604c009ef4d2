//! Core types for the storefront-seed pipeline.
//!
//! This crate provides the foundational types shared by the generator,
//! the interchange writer and the SQLite loader:
//!
//! - [`TableDefinition`] - Declarative per-table column layout (name → [`ColumnType`])
//! - [`Value`] - A single typed cell of a row
//! - [`Record`] - Entities that can be flattened into a row of [`Value`]s
//! - [`model`] - The five entities and their fixed vocabularies
//!
//! # Architecture
//!
//! ```text
//! storefront-core (this crate)
//!    │
//!    ├─── storefront-generator     (builds records)
//!    ├─── csv-types                (Value <-> CSV text)
//!    ├─── storefront-populate-csv  (writes interchange files)
//!    └─── sqlite-loader            (reads interchange files into SQLite)
//! ```
//!
//! Both the writer and the loader read column order and column types from
//! the same [`TableDefinition`] constants, so the two sides cannot drift.

pub mod model;
pub mod schema;
pub mod values;

pub use model::{
    Carrier, Category, Customer, LoyaltyTier, Order, OrderStatus, Payment, PaymentMethod,
    PaymentStatus, Product, Shipment, UsState, DATE_FORMAT, TIMESTAMP_FORMAT,
};
pub use schema::{
    table_by_name, ColumnDefinition, ColumnType, SchemaError, TableDefinition, CUSTOMERS,
    LOAD_ORDER, ORDERS, PAYMENTS, PRODUCTS, SHIPPING,
};
pub use values::{Record, Value};
