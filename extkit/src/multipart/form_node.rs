// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::FilePayload;
use std::collections::BTreeMap;

/// A loosely shaped tree of form data. The same shape is used for plain values
/// ([`FieldValue`], leaves are optional strings) and for files ([`FileNode`], leaves are
/// [`FilePayload`]s).
///
/// Children of an [`Object`] are visited in key order. Don't rely on that order when
/// talking to a server though, form fields at the same nesting level are unordered.
///
/// ```
/// use extkit::{FieldValue, FormNode};
///
/// let it = FieldValue::object([
///     ("name", FieldValue::from("Ada")),
///     ("langs", FieldValue::array(["en", "fr"])),
/// ]);
/// assert!(matches!(it, FormNode::Object(_)));
/// ```
///
/// [`Object`]: FormNode::Object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNode<T> {
    Leaf(T),
    Array(Vec<FormNode<T>>),
    Object(BTreeMap<String, FormNode<T>>),
}

/// Plain form values. A `None` leaf holds a position in the tree (eg: a JSON `null`
/// inside an array) but has no text, so no field is written for it.
pub type FieldValue = FormNode<Option<String>>;

/// File payloads, arranged in the same shape as plain values.
pub type FileNode = FormNode<FilePayload>;

/// The top level of a form is always an object.
pub type FormMap<T> = BTreeMap<String, FormNode<T>>;
pub type FieldMap = FormMap<Option<String>>;
pub type FileMap = FormMap<FilePayload>;

impl<T> FormNode<T> {
    pub fn object<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, FormNode<T>)>,
    ) -> Self {
        FormNode::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn array<V: Into<FormNode<T>>>(items: impl IntoIterator<Item = V>) -> Self {
        FormNode::Array(items.into_iter().map(Into::into).collect())
    }

    /// Number of leaves in the tree, including leaves without text. Empty containers
    /// contribute nothing.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            FormNode::Leaf(_) => 1,
            FormNode::Array(items) => items.iter().map(FormNode::leaf_count).sum(),
            FormNode::Object(entries) => entries.values().map(FormNode::leaf_count).sum(),
        }
    }
}

impl FieldValue {
    /// A leaf without text, eg: `["a", null, "b"]` keeps `b` at position 2.
    #[must_use]
    pub fn absent() -> Self { FormNode::Leaf(None) }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self { FormNode::Leaf(Some(value.to_string())) }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self { FormNode::Leaf(Some(value)) }
}

impl From<FilePayload> for FileNode {
    fn from(value: FilePayload) -> Self { FormNode::Leaf(value) }
}

impl<T> From<Vec<FormNode<T>>> for FormNode<T> {
    fn from(items: Vec<FormNode<T>>) -> Self { FormNode::Array(items) }
}

impl<T> From<FormMap<T>> for FormNode<T> {
    fn from(entries: FormMap<T>) -> Self { FormNode::Object(entries) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_object_and_array_constructors() {
        let it = FieldValue::object([
            ("a", FieldValue::from("1")),
            ("b", FieldValue::array(["2", "3"])),
        ]);

        let mut expected = FieldMap::new();
        expected.insert("a".into(), FormNode::Leaf(Some("1".into())));
        expected.insert(
            "b".into(),
            FormNode::Array(vec![
                FormNode::Leaf(Some("2".into())),
                FormNode::Leaf(Some("3".into())),
            ]),
        );
        assert_eq2!(it, FormNode::Object(expected));
    }

    #[test]
    fn test_leaf_count_ignores_empty_containers() {
        let it = FieldValue::object([
            ("a", FieldValue::from("1")),
            ("missing", FieldValue::absent()),
            ("empty_list", FieldValue::Array(vec![])),
            ("empty_object", FieldValue::Object(FieldMap::new())),
            (
                "nested",
                FieldValue::object([("x", FieldValue::array(["1", "2", "3"]))]),
            ),
        ]);
        assert_eq2!(it.leaf_count(), 5);
    }
}
