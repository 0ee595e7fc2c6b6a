//! Typed field access over untyped attribute sets
//!
//! These helpers never perform I/O. Field paths are dotted (`system.arch`) so
//! errors point at the exact location of the problem.

use crate::error::{ComposerError, Result};
use serde_json::{Map, Value};

/// Describe the kind of a value for error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an attribute set",
    }
}

fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// View a value as an attribute set
pub fn require_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ComposerError::invalid_type(path, "an attribute set", value_kind(value)))
}

/// Look up a required field of an attribute set
pub fn require_field<'a>(
    attrs: &'a Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<&'a Value> {
    attrs
        .get(key)
        .ok_or_else(|| ComposerError::missing_field(field_path(parent, key)))
}

/// Look up a required string field of an attribute set
pub fn require_str(attrs: &Map<String, Value>, key: &str, parent: &str) -> Result<String> {
    let value = require_field(attrs, key, parent)?;
    value.as_str().map(str::to_string).ok_or_else(|| {
        ComposerError::invalid_type(field_path(parent, key), "a string", value_kind(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "a boolean");
        assert_eq!(value_kind(&json!(3)), "a number");
        assert_eq!(value_kind(&json!("x")), "a string");
        assert_eq!(value_kind(&json!([1])), "a list");
        assert_eq!(value_kind(&json!({})), "an attribute set");
    }

    #[test]
    fn test_require_str_nested_path() {
        let value = json!({ "arch": 64 });
        let attrs = value.as_object().unwrap();

        let err = require_str(attrs, "arch", "system").unwrap_err();
        assert!(err.to_string().contains("'system.arch'"));

        let err = require_str(attrs, "os", "system").unwrap_err();
        assert!(err.to_string().contains("'system.os' is missing"));
    }

    #[test]
    fn test_require_str_top_level() {
        let value = json!({ "name": "example" });
        let attrs = value.as_object().unwrap();
        assert_eq!(require_str(attrs, "name", "").unwrap(), "example");
    }
}
