// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Writers for the sections of a `multipart/form-data` body. [`JsonPartsBuilder`] writes
//! the plain values, [`FilePartsBuilder`] writes the files. Both only write sections,
//! the closing boundary is added by [`MultipartFormDataBuilder`].
//!
//! [`MultipartFormDataBuilder`]: super::MultipartFormDataBuilder

use super::{BOUNDARY_DASHES, CONTENT_DISPOSITION_FORM_DATA, CONTENT_TYPE, CRLF,
            DEBUG_MULTIPART, FieldMap, FileMap, flatten_form_tree};

/// Writes one section per plain value leaf that has text:
///
/// ```text
/// --<boundary>\r\n
/// Content-Disposition: form-data; name="<path>"\r\n
/// \r\n
/// <value>\r\n
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonPartsBuilder<'a> {
    boundary: &'a str,
    values: &'a FieldMap,
}

impl<'a> JsonPartsBuilder<'a> {
    #[must_use]
    pub fn new(boundary: &'a str, values: &'a FieldMap) -> Self {
        Self { boundary, values }
    }

    /// Appends the sections to `acc` and returns how many were written. Leaves without
    /// text are skipped, and the positions of their siblings stay as they are.
    pub fn append_to(&self, acc: &mut Vec<u8>) -> usize {
        let mut count = 0;
        for field in flatten_form_tree(self.values) {
            let Some(value) = field.value.as_deref() else {
                tracing::trace!(
                    message = "skipped value without text",
                    name = %field.name
                );
                continue;
            };

            write_boundary_line(acc, self.boundary);
            acc.extend_from_slice(
                format!("{CONTENT_DISPOSITION_FORM_DATA}; name=\"{}\"{CRLF}", field.name)
                    .as_bytes(),
            );
            acc.extend_from_slice(CRLF.as_bytes());
            acc.extend_from_slice(value.as_bytes());
            acc.extend_from_slice(CRLF.as_bytes());
            count += 1;

            DEBUG_MULTIPART.then(|| {
                tracing::trace!(message = "wrote value section", name = %field.name);
            });
        }
        count
    }

    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let mut acc = vec![];
        self.append_to(&mut acc);
        acc
    }
}

/// Writes one section per file leaf that has bytes:
///
/// ```text
/// --<boundary>\r\n
/// Content-Disposition: form-data; name="<path>"; filename="<path>.<subtype>"\r\n
/// Content-Type: <mime type>\r\n
/// \r\n
/// <raw bytes>\r\n
/// ```
///
/// Payloads without bytes are skipped.
#[derive(Debug, Clone, Copy)]
pub struct FilePartsBuilder<'a> {
    boundary: &'a str,
    files: &'a FileMap,
}

impl<'a> FilePartsBuilder<'a> {
    #[must_use]
    pub fn new(boundary: &'a str, files: &'a FileMap) -> Self { Self { boundary, files } }

    /// Appends the sections to `acc` and returns how many were written.
    pub fn append_to(&self, acc: &mut Vec<u8>) -> usize {
        let mut count = 0;
        for field in flatten_form_tree(self.files) {
            let Some(bytes) = field.value.bytes.as_deref() else {
                tracing::trace!(
                    message = "skipped file without bytes",
                    name = %field.name
                );
                continue;
            };

            let file_name = field.value.file_name_for(&field.name);
            write_boundary_line(acc, self.boundary);
            acc.extend_from_slice(
                format!(
                    "{CONTENT_DISPOSITION_FORM_DATA}; \
                     name=\"{}\"; filename=\"{file_name}\"{CRLF}",
                    field.name
                )
                .as_bytes(),
            );
            acc.extend_from_slice(
                format!("{CONTENT_TYPE}: {}{CRLF}", field.value.mime_type).as_bytes(),
            );
            acc.extend_from_slice(CRLF.as_bytes());
            acc.extend_from_slice(bytes);
            acc.extend_from_slice(CRLF.as_bytes());
            count += 1;

            DEBUG_MULTIPART.then(|| {
                tracing::trace!(
                    message = "wrote file section",
                    name = %field.name,
                    file_name = %file_name,
                    len = bytes.len()
                );
            });
        }
        count
    }

    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let mut acc = vec![];
        self.append_to(&mut acc);
        acc
    }
}

/// `--<boundary>\r\n`
fn write_boundary_line(acc: &mut Vec<u8>, boundary: &str) {
    acc.extend_from_slice(BOUNDARY_DASHES.as_bytes());
    acc.extend_from_slice(boundary.as_bytes());
    acc.extend_from_slice(CRLF.as_bytes());
}
