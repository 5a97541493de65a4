//! Ingestion of deserialized JSON records.

use num_bigint::BigInt;
use serde_json::Value as Json;

use crate::value::Value;

/// Integers become `Long` (or `BigInt` above `i64::MAX`), other numbers
/// `Double`. Objects have no counterpart and are kept as their JSON text.
impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(BigInt::from(u))
                } else {
                    n.as_f64().map_or(Value::Null, Value::from)
                }
            }
            Json::String(s) => Value::Text(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            object @ Json::Object(_) => Value::Text(object.to_string()),
        }
    }
}
