//! Core domain types
//!
//! These types describe what the status API returns and how a single
//! homework review result is turned into a chat message.

pub mod homework;
pub mod response;

use serde_json::Value;

/// Human readable name of a JSON value's type, used in shape errors
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
