//! CSV type conversions for storefront-core values.
//!
//! This crate provides bidirectional conversions between storefront-core's
//! [`Value`](storefront_core::Value) and the text cells of the interchange
//! files.
//!
//! # Modules
//!
//! - [`forward`] - Value → CSV string conversion
//! - [`reverse`] - CSV string → Value conversion
//!
//! # Example
//!
//! ```
//! use csv_types::{csv_string_to_value, CsvValue};
//! use storefront_core::{ColumnType, Value};
//!
//! // Forward: Value → CSV string
//! let csv_val: CsvValue = Value::Integer(42).into();
//! assert_eq!(csv_val.into_inner(), "42");
//!
//! // Reverse: CSV string → Value
//! let value = csv_string_to_value("42", ColumnType::Integer).unwrap();
//! assert_eq!(value, Value::Integer(42));
//! ```

pub mod forward;
pub mod reverse;

pub use forward::{record_to_csv_fields, CsvValue};
pub use reverse::{csv_string_to_value, CsvParseError};
