// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convert loosely typed JSON into the plain value tree used by
//! [`MultipartFormDataBuilder`](super::MultipartFormDataBuilder).

use super::{FieldMap, FieldValue, FormNode};
use serde_json::Value;

impl FieldValue {
    /// Converts one JSON value into a form node:
    /// - Strings are used as is.
    /// - Numbers and booleans are written in their JSON text form, eg: `42`, `1.5`,
    ///   `true`.
    /// - Arrays and objects keep their shape.
    /// - `null` has no text form. It becomes a leaf without text, which keeps its
    ///   position in an array but is never written as a field.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::absent(),
            Value::String(it) => FormNode::Leaf(Some(it.clone())),
            Value::Bool(it) => FormNode::Leaf(Some(it.to_string())),
            Value::Number(it) => FormNode::Leaf(Some(it.to_string())),
            Value::Array(items) => {
                FormNode::Array(items.iter().map(FieldValue::from_json).collect())
            }
            Value::Object(entries) => FormNode::Object(object_entries(entries)),
        }
    }
}

/// The top level of a form has to be an object. Any other JSON value yields an empty
/// map.
#[must_use]
pub fn field_map_from_json(value: &Value) -> FieldMap {
    match value {
        Value::Object(entries) => object_entries(entries),
        _ => {
            tracing::debug!(
                message = "Top level form value is not a JSON object, ignoring it",
                value = %value
            );
            FieldMap::new()
        }
    }
}

fn object_entries(entries: &serde_json::Map<String, Value>) -> FieldMap {
    entries
        .iter()
        .map(|(key, value)| (key.clone(), FieldValue::from_json(value)))
        .collect()
}
