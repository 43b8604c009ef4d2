//! Reverse conversion: CSV string → Value.
//!
//! Parsing is driven by the declared [`ColumnType`] of the target column;
//! the text itself is never used to guess a type.

use rust_decimal::Decimal;
use std::str::FromStr;
use storefront_core::{ColumnType, Value};

/// Error type for CSV parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to parse '{value}' as {expected_type}: {message}")]
pub struct CsvParseError {
    pub message: String,
    pub value: String,
    pub expected_type: ColumnType,
}

impl CsvParseError {
    fn new(value: &str, expected_type: ColumnType, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            value: value.to_string(),
            expected_type,
        }
    }
}

/// Parse a CSV string value according to the column type.
///
/// This is the reverse of `CsvValue::from(Value)`. Empty strings are not
/// treated as null: a numeric column with an empty cell is an error.
pub fn csv_string_to_value(value: &str, column_type: ColumnType) -> Result<Value, CsvParseError> {
    match column_type {
        ColumnType::Integer => value
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| CsvParseError::new(value, column_type, format!("Invalid integer: {e}"))),

        ColumnType::Real => Decimal::from_str(value)
            .map(Value::Real)
            .map_err(|e| CsvParseError::new(value, column_type, format!("Invalid decimal: {e}"))),

        ColumnType::Text => Ok(Value::Text(value.to_string())),
    }
}
