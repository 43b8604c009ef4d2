//! Declarative table layouts shared by the interchange writer and the loader.
//!
//! Each entity has exactly one [`TableDefinition`]. The definition fixes the
//! interchange file name, the column order of the header row, and the
//! semantic type every column is cast to when it is read back.
//!
//! ## Load order
//!
//! [`LOAD_ORDER`] lists parents before children so that foreign-key checks
//! succeed while tables are loaded one at a time:
//!
//! ```text
//! customers ─┐
//!            ├─> orders ─┬─> payments
//! products ──┘           └─> shipping
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema lookups.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Table not found in the static schema
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Column not found in table schema
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },
}

// ============================================================================
// Column Types
// ============================================================================

/// Semantic type of a column, as understood by both CSV and SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Signed 64-bit integer
    Integer,
    /// Exact decimal, stored as REAL in SQLite
    Real,
    /// Free text (dates, enumerations and boolean flags included)
    Text,
}

impl ColumnType {
    /// SQLite type affinity used in DDL.
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_type())
    }
}

/// Single column metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Column name, identical in the CSV header and the SQL table
    pub name: &'static str,

    /// Column type
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    /// Create a new column definition.
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type }
    }
}

// ============================================================================
// Table Definitions
// ============================================================================

/// Table layout: name, interchange file and ordered columns.
///
/// The first column is always the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDefinition {
    /// Table name in the relational store
    pub name: &'static str,

    /// File name of the interchange file, relative to the data directory
    pub file_name: &'static str,

    /// Columns in interchange order
    pub columns: &'static [ColumnDefinition],
}

impl TableDefinition {
    /// Column names in interchange order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Number of columns.
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get the declared type of a column.
    pub fn column_type(&self, name: &str) -> Result<ColumnType, SchemaError> {
        self.get_column(name)
            .map(|c| c.column_type)
            .ok_or_else(|| SchemaError::ColumnNotFound {
                table: self.name.to_string(),
                column: name.to_string(),
            })
    }

    /// Parameterised INSERT statement covering every column.
    pub fn insert_sql(&self) -> String {
        let placeholders: Vec<String> = (1..=self.columns.len()).map(|i| format!("?{i}")).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name,
            self.column_names().join(", "),
            placeholders.join(", ")
        )
    }
}

pub const CUSTOMERS: TableDefinition = TableDefinition {
    name: "customers",
    file_name: "customers.csv",
    columns: &[
        ColumnDefinition::new("customer_id", ColumnType::Integer),
        ColumnDefinition::new("first_name", ColumnType::Text),
        ColumnDefinition::new("last_name", ColumnType::Text),
        ColumnDefinition::new("email", ColumnType::Text),
        ColumnDefinition::new("phone", ColumnType::Text),
        ColumnDefinition::new("loyalty_tier", ColumnType::Text),
        ColumnDefinition::new("created_at", ColumnType::Text),
    ],
};

pub const PRODUCTS: TableDefinition = TableDefinition {
    name: "products",
    file_name: "products.csv",
    columns: &[
        ColumnDefinition::new("product_id", ColumnType::Integer),
        ColumnDefinition::new("product_name", ColumnType::Text),
        ColumnDefinition::new("category", ColumnType::Text),
        ColumnDefinition::new("unit_price", ColumnType::Real),
        ColumnDefinition::new("stock_qty", ColumnType::Integer),
        ColumnDefinition::new("active", ColumnType::Text),
    ],
};

pub const ORDERS: TableDefinition = TableDefinition {
    name: "orders",
    file_name: "orders.csv",
    columns: &[
        ColumnDefinition::new("order_id", ColumnType::Integer),
        ColumnDefinition::new("customer_id", ColumnType::Integer),
        ColumnDefinition::new("order_date", ColumnType::Text),
        ColumnDefinition::new("order_status", ColumnType::Text),
        ColumnDefinition::new("total_amount", ColumnType::Real),
        ColumnDefinition::new("primary_product_id", ColumnType::Integer),
    ],
};

pub const PAYMENTS: TableDefinition = TableDefinition {
    name: "payments",
    file_name: "payments.csv",
    columns: &[
        ColumnDefinition::new("payment_id", ColumnType::Integer),
        ColumnDefinition::new("order_id", ColumnType::Integer),
        ColumnDefinition::new("payment_date", ColumnType::Text),
        ColumnDefinition::new("payment_method", ColumnType::Text),
        ColumnDefinition::new("amount", ColumnType::Real),
        ColumnDefinition::new("currency", ColumnType::Text),
        ColumnDefinition::new("payment_status", ColumnType::Text),
    ],
};

pub const SHIPPING: TableDefinition = TableDefinition {
    name: "shipping",
    file_name: "shipping.csv",
    columns: &[
        ColumnDefinition::new("shipment_id", ColumnType::Integer),
        ColumnDefinition::new("order_id", ColumnType::Integer),
        ColumnDefinition::new("shipped_date", ColumnType::Text),
        ColumnDefinition::new("delivery_date", ColumnType::Text),
        ColumnDefinition::new("carrier", ColumnType::Text),
        ColumnDefinition::new("tracking_number", ColumnType::Text),
        ColumnDefinition::new("shipping_cost", ColumnType::Real),
        ColumnDefinition::new("destination_state", ColumnType::Text),
    ],
};

/// Tables in foreign-key dependency order (parents first).
pub const LOAD_ORDER: [&TableDefinition; 5] =
    [&CUSTOMERS, &PRODUCTS, &ORDERS, &PAYMENTS, &SHIPPING];

/// Look up a table definition by its table name.
pub fn table_by_name(name: &str) -> Result<&'static TableDefinition, SchemaError> {
    LOAD_ORDER
        .iter()
        .copied()
        .find(|t| t.name == name)
        .ok_or_else(|| SchemaError::TableNotFound(name.to_string()))
}
