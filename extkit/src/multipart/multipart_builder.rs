// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BOUNDARY_DASHES, CRLF, FieldMap, FilePartsBuilder, FileMap, JsonPartsBuilder,
            MULTIPART_FORM_DATA_MIME};

/// Builds a `multipart/form-data` body out of a tree of plain values and a tree of files.
///
/// The builder is immutable. It owns both trees and the boundary token, and [`build()`]
/// can be called any number of times, producing the same bytes each time. Every call to
/// [`new()`] generates a fresh random boundary.
///
/// The body contains, in order:
/// 1. One section per plain value leaf (see [`JsonPartsBuilder`]).
/// 2. One section per file leaf that has bytes (see [`FilePartsBuilder`]).
/// 3. The closing boundary `--<boundary>--\r\n`.
///
/// Building can't fail. A file without bytes is an absent field, not an error.
///
/// ```
/// use extkit::{FieldMap, FieldValue, FileMap, FileNode, FilePayload,
///              MultipartFormDataBuilder};
///
/// let mut values = FieldMap::new();
/// values.insert("title".into(), FieldValue::from("Holiday"));
///
/// let mut files = FileMap::new();
/// let cover = FilePayload::new("image/jpeg", vec![0xFF_u8, 0xD8]);
/// files.insert("cover".into(), FileNode::from(cover));
///
/// let form = MultipartFormDataBuilder::with_boundary("b0undary", values, files).build();
/// let body = String::from_utf8_lossy(&form.body);
/// assert!(body.starts_with("--b0undary\r\nContent-Disposition: form-data;"));
/// assert!(body.contains("name=\"title\"\r\n\r\nHoliday\r\n"));
/// assert!(body.contains("filename=\"cover.jpeg\"\r\nContent-Type: image/jpeg\r\n"));
/// assert!(body.ends_with("--b0undary--\r\n"));
/// assert_eq!(form.content_type(), "multipart/form-data; boundary=b0undary");
/// ```
///
/// [`build()`]: Self::build
/// [`new()`]: Self::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFormDataBuilder {
    boundary: String,
    values: FieldMap,
    files: FileMap,
}

/// The encoded body and the boundary that delimits it. Send the body with the header
/// `Content-Type: `[`content_type()`].
///
/// [`content_type()`]: Self::content_type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFormData {
    pub boundary: String,
    pub body: Vec<u8>,
}

impl MultipartFormDataBuilder {
    #[must_use]
    pub fn new(values: FieldMap, files: FileMap) -> Self {
        Self::with_boundary(generate_boundary(), values, files)
    }

    /// Use a caller provided boundary instead of a random one. The boundary must not
    /// occur anywhere in the values or the file bytes.
    #[must_use]
    pub fn with_boundary(
        boundary: impl Into<String>,
        values: FieldMap,
        files: FileMap,
    ) -> Self {
        Self {
            boundary: boundary.into(),
            values,
            files,
        }
    }

    #[must_use]
    pub fn boundary(&self) -> &str { &self.boundary }

    #[must_use]
    pub fn build(&self) -> MultipartFormData {
        let mut body = vec![];

        let value_count =
            JsonPartsBuilder::new(&self.boundary, &self.values).append_to(&mut body);
        let file_count =
            FilePartsBuilder::new(&self.boundary, &self.files).append_to(&mut body);

        // --<boundary>--\r\n
        body.extend_from_slice(BOUNDARY_DASHES.as_bytes());
        body.extend_from_slice(self.boundary.as_bytes());
        body.extend_from_slice(BOUNDARY_DASHES.as_bytes());
        body.extend_from_slice(CRLF.as_bytes());

        tracing::debug!(
            message = "Built multipart/form-data body",
            boundary = %self.boundary,
            value_count,
            file_count,
            body_len = body.len()
        );

        MultipartFormData {
            boundary: self.boundary.clone(),
            body,
        }
    }
}

impl MultipartFormData {
    /// Value for the `Content-Type` request header, eg:
    /// `multipart/form-data; boundary=4c1c...`.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("{MULTIPART_FORM_DATA_MIME}; boundary={}", self.boundary)
    }

    #[must_use]
    pub fn into_body(self) -> Vec<u8> { self.body }
}

/// A random v4 UUID, eg: `67e55044-10b1-426f-9247-bb680e5fe0c8`.
#[must_use]
pub fn generate_boundary() -> String { uuid::Uuid::new_v4().to_string() }
