// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn a loosely typed [`serde_json::Value`] into a concrete type. Handy when a response
//! is parsed as a [`Value`] first and only parts of it are needed.

use miette::Diagnostic;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum JsonCastError {
    #[error("JSON value does not have the expected shape")]
    #[diagnostic(
        code(extkit::json::deserialize),
        help("Check that field names and value types match the target type")
    )]
    Deserialize(#[from] serde_json::Error),

    #[error("Nothing found at JSON pointer `{pointer}`")]
    #[diagnostic(
        code(extkit::json::missing_path),
        help("Pointers look like `/items/0/name`, and an empty pointer is the root")
    )]
    MissingPath { pointer: String },
}

/// Deserialize `value` into `T`, borrowing it rather than consuming it.
///
/// ```
/// use extkit::cast_json;
/// use serde_json::json;
///
/// let it: Vec<u8> = cast_json(&json!([1, 2, 3])).unwrap();
/// assert_eq!(it, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns [`JsonCastError::Deserialize`] if `value` can't be represented as `T`.
pub fn cast_json<T: DeserializeOwned>(value: &Value) -> Result<T, JsonCastError> {
    let it = T::deserialize(value)?;
    Ok(it)
}

/// Like [`cast_json()`], for the value at `pointer` (RFC 6901), eg: `/crate/max_version`.
///
/// # Errors
///
/// Returns [`JsonCastError::MissingPath`] if nothing lives at `pointer`, or
/// [`JsonCastError::Deserialize`] if what lives there can't be represented as `T`.
pub fn cast_json_at<T: DeserializeOwned>(
    value: &Value,
    pointer: &str,
) -> Result<T, JsonCastError> {
    let Some(it) = value.pointer(pointer) else {
        return Err(JsonCastError::MissingPath {
            pointer: pointer.to_string(),
        });
    };
    cast_json(it)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use crate::assert_eq2;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Release {
        name: String,
        downloads: u64,
        yanked: bool,
    }

    fn crate_info() -> Value {
        json!({
            "crate": { "name": "extkit", "max_version": "0.1.0" },
            "versions": [
                { "name": "0.1.0", "downloads": 12, "yanked": false },
                { "name": "0.0.1", "downloads": 3, "yanked": true },
            ]
        })
    }

    #[test]
    fn test_cast_whole_value() {
        let it: Vec<Release> = cast_json(&crate_info()["versions"]).unwrap();
        assert_eq2!(it.len(), 2);
        assert_eq2!(
            it[1],
            Release {
                name: "0.0.1".into(),
                downloads: 3,
                yanked: true,
            }
        );
    }

    #[test]
    fn test_cast_at_pointer() {
        let value = crate_info();
        let version: String = cast_json_at(&value, "/crate/max_version").unwrap();
        assert_eq2!(version, "0.1.0");

        let downloads: u64 = cast_json_at(&value, "/versions/0/downloads").unwrap();
        assert_eq2!(downloads, 12);
    }

    #[test]
    fn test_missing_pointer() {
        let result = cast_json_at::<String>(&crate_info(), "/crate/min_version");
        assert!(matches!(
            result,
            Err(JsonCastError::MissingPath { pointer }) if pointer == "/crate/min_version"
        ));
    }

    #[test]
    fn test_wrong_shape() {
        let result = cast_json::<Release>(&json!({ "name": "x" }));
        assert!(matches!(result, Err(JsonCastError::Deserialize(_))));

        let result = cast_json_at::<u64>(&crate_info(), "/crate/name");
        assert!(matches!(result, Err(JsonCastError::Deserialize(_))));
    }
}
