//! Shape helpers over generic document values.

use serde_json::{Map, Value};

use crate::SchemaError;

/// Short name of a value's shape, used in error messages.
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Look up a required key, reporting its dotted path when absent.
pub(crate) fn required<'a>(
    map: &'a Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<&'a Value, SchemaError> {
    map.get(key)
        .ok_or_else(|| SchemaError::missing_key(join(prefix, key)))
}

pub(crate) fn required_map<'a>(
    map: &'a Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<&'a Map<String, Value>, SchemaError> {
    match required(map, prefix, key)? {
        Value::Object(inner) => Ok(inner),
        other => Err(SchemaError::invalid_shape(
            join(prefix, key),
            "a mapping",
            describe(other),
        )),
    }
}

pub(crate) fn required_string(
    map: &Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<String, SchemaError> {
    match required(map, prefix, key)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(SchemaError::invalid_shape(
            join(prefix, key),
            "a string",
            describe(other),
        )),
    }
}

pub(crate) fn required_string_list(
    map: &Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<Vec<String>, SchemaError> {
    let invalid = |found| SchemaError::invalid_shape(join(prefix, key), "a list of strings", found);
    match required(map, prefix, key)? {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(invalid(describe(other))),
            })
            .collect(),
        other => Err(invalid(describe(other))),
    }
}

/// Convert a TOML document into the generic value model.
///
/// Table order survives because both crates are built with `preserve_order`.
pub(crate) fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, from_toml(value)))
                .collect(),
        ),
    }
}
