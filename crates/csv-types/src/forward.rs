//! Forward conversion: Value → CSV string.

use storefront_core::{Record, Value};

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<Value> for CsvValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(i) => CsvValue(i.to_string()),
            // Decimal keeps its own scale, so 12.50 stays "12.50"
            Value::Real(d) => CsvValue(d.to_string()),
            Value::Text(s) => CsvValue(s),
        }
    }
}

/// Convert a record to its CSV fields, in column order.
///
/// Quoting of fields that contain the delimiter is left to the CSV writer.
pub fn record_to_csv_fields<R: Record>(record: &R) -> Vec<String> {
    record
        .values()
        .into_iter()
        .map(|v| CsvValue::from(v).into_inner())
        .collect()
}
