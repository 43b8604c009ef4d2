//! Row cell values and the [`Record`] trait.

use crate::schema::{ColumnType, TableDefinition};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single typed cell.
///
/// Currency is carried as an exact [`Decimal`] so that rounding to cents
/// happens once, at generation time, and survives the text round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),

    /// Exact decimal
    Real(Decimal),

    /// Text value
    Text(String),
}

impl Value {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The column type this value satisfies.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Integer(_) => ColumnType::Integer,
            Self::Real(_) => ColumnType::Real,
            Self::Text(_) => ColumnType::Text,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Real(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An entity that flattens into one row of a [`TableDefinition`].
///
/// `values()` must return one value per column, in column order, each
/// matching the declared column type.
pub trait Record {
    /// Table this record belongs to.
    const TABLE: &'static TableDefinition;

    /// Row values in column order.
    fn values(&self) -> Vec<Value>;

    /// Check that `values()` agrees with the table definition.
    ///
    /// Returns the name of the first offending column, or `None` if the row
    /// fits. A wrong arity reports the table name.
    fn layout_mismatch(&self) -> Option<&'static str> {
        let values = self.values();
        if values.len() != Self::TABLE.arity() {
            return Some(Self::TABLE.name);
        }
        Self::TABLE
            .columns
            .iter()
            .zip(&values)
            .find(|(column, value)| column.column_type != value.column_type())
            .map(|(column, _)| column.name)
    }
}
