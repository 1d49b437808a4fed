//! Status API response shape

use serde_json::Value;

use super::json_type_name;
use crate::error::ShapeError;

/// Validated body of a status API response
///
/// Homework entries are kept raw: each one is checked separately when it is
/// formatted, so one bad entry does not hide the shape of the others.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResponse {
    pub homeworks: Vec<Value>,
    /// Server time to use as the next `from_date`, when reported
    pub current_date: Option<i64>,
}

/// Checks that a decoded response has the documented shape
///
/// The body must be an object with a `homeworks` array. `current_date` is
/// optional, but when present (and not null) it must be an integer.
pub fn validate(response: &Value) -> Result<StatusResponse, ShapeError> {
    let object = response.as_object().ok_or(ShapeError::TypeMismatch {
        expected: "object",
        found: json_type_name(response),
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ShapeError::MissingField("homeworks"))?;

    let homeworks = homeworks.as_array().ok_or(ShapeError::TypeMismatch {
        expected: "array",
        found: json_type_name(homeworks),
    })?;

    let current_date = match object.get("current_date") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_i64().ok_or(ShapeError::TypeMismatch {
            expected: "integer",
            found: if value.is_u64() {
                "out-of-range integer"
            } else {
                json_type_name(value)
            },
        })?),
    };

    Ok(StatusResponse {
        homeworks: homeworks.clone(),
        current_date,
    })
}
