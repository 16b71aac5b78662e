//! Inbound request decoding.
//!
//! Normalizes JSON bodies and query parameters before the pipelines touch
//! them. Query parameters are carried as an ordered sequence, not a map, so
//! "first parameter" keeps its meaning.

use serde_json::Value;

use crate::store::Record;

use super::errors::{ApiError, ApiResult};

/// Decode a JSON body as a flat record object
pub fn decode_object(body: Value) -> ApiResult<Record> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::InvalidBody(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Decode an update body: an object with exactly one field/value pair
pub fn decode_single_field(body: Value) -> ApiResult<(String, Value)> {
    let map = decode_object(body)?;
    if map.len() != 1 {
        return Err(ApiError::InvalidBody(format!(
            "expected exactly one field to update, got {}",
            map.len()
        )));
    }
    map.into_iter()
        .next()
        .ok_or_else(|| ApiError::InvalidBody("expected exactly one field to update".to_string()))
}

/// Value of a named query parameter, if present
pub fn query_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
