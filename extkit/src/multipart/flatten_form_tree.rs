// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{FormMap, FormNode};

/// One leaf of a form tree, with its bracket qualified field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedField<'a, T> {
    pub name: String,
    pub value: &'a T,
}

/// Walks `form_map` depth first and returns one [`FlattenedField`] per leaf.
///
/// Field names are built by descending into the tree:
/// - A top level key is used bare: `name`.
/// - An object child appends `[key]`: `user[name]`.
/// - An array element appends its position: `tags[0]`.
///
/// Empty arrays and objects produce no fields.
///
/// ```
/// use extkit::{FieldMap, FieldValue, flatten_form_tree};
///
/// let mut form = FieldMap::new();
/// form.insert(
///     "user".into(),
///     FieldValue::object([("tags", FieldValue::array(["a", "b"]))]),
/// );
///
/// let names: Vec<String> =
///     flatten_form_tree(&form).into_iter().map(|it| it.name).collect();
/// assert_eq!(names, ["user[tags][0]", "user[tags][1]"]);
/// ```
pub fn flatten_form_tree<T>(form_map: &FormMap<T>) -> Vec<FlattenedField<'_, T>> {
    let mut acc = vec![];
    for (key, node) in form_map {
        flatten_node(key.clone(), node, &mut acc);
    }
    acc
}

fn flatten_node<'a, T>(
    path: String,
    node: &'a FormNode<T>,
    acc: &mut Vec<FlattenedField<'a, T>>,
) {
    match node {
        FormNode::Leaf(value) => acc.push(FlattenedField { name: path, value }),
        FormNode::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_node(format!("{path}[{index}]"), item, acc);
            }
        }
        FormNode::Object(entries) => {
            for (key, child) in entries {
                flatten_node(format!("{path}[{key}]"), child, acc);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldMap, FieldValue, FileMap, FileNode, FilePayload, assert_eq2};

    fn names<'a, T>(fields: &'a [FlattenedField<'a, T>]) -> Vec<&'a str> {
        fields.iter().map(|it| it.name.as_str()).collect()
    }

    #[test]
    fn test_top_level_keys_are_bare() {
        let mut form = FieldMap::new();
        form.insert("first".into(), "Vakhtang".into());
        form.insert("last".into(), "Kontridze".into());

        let it = flatten_form_tree(&form);
        assert_eq2!(names(&it), vec!["first", "last"]);
        assert_eq2!(it[0].value.as_deref(), Some("Vakhtang"));
        assert_eq2!(it[1].value.as_deref(), Some("Kontridze"));
    }

    #[test]
    fn test_nested_file_arrays_keep_positions() {
        let mut files = FileMap::new();
        files.insert(
            "gallery".into(),
            FileNode::object([(
                "images",
                FileNode::array([
                    FilePayload::new("image/png", b"one".to_vec()),
                    FilePayload::new("image/png", b"two".to_vec()),
                ]),
            )]),
        );

        let it = flatten_form_tree(&files);
        assert_eq2!(names(&it), vec!["gallery[images][0]", "gallery[images][1]"]);
        assert_eq2!(it[1].value.bytes.as_deref(), Some(b"two".as_slice()));
    }

    #[test]
    fn test_mixed_nesting() {
        let mut form = FieldMap::new();
        form.insert(
            "order".into(),
            FieldValue::object([
                (
                    "items",
                    FieldValue::array([
                        FieldValue::object([("sku", "A1".into()), ("qty", "2".into())]),
                        FieldValue::object([("sku", "B2".into())]),
                    ]),
                ),
                ("note", "leave at door".into()),
            ]),
        );

        let it = flatten_form_tree(&form);
        assert_eq2!(
            names(&it),
            vec![
                "order[items][0][qty]",
                "order[items][0][sku]",
                "order[items][1][sku]",
                "order[note]",
            ]
        );
    }

    #[test]
    fn test_empty_containers_produce_nothing() {
        let mut form = FieldMap::new();
        form.insert("list".into(), FieldValue::Array(vec![]));
        form.insert("object".into(), FieldValue::Object(FieldMap::new()));
        assert!(flatten_form_tree(&form).is_empty());
    }
}
