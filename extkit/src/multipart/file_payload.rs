// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{MIME_PARAMETER_SEPARATOR, MIME_SUBTYPE_SEPARATOR};

/// The content of one file field. A payload without bytes is treated as an absent field
/// and never written to the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub mime_type: String,
    pub bytes: Option<Vec<u8>>,
}

impl FilePayload {
    pub fn new(mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: Some(bytes.into()),
        }
    }

    /// A payload whose data isn't available, eg: an image that failed to load.
    pub fn empty(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: None,
        }
    }

    /// The MIME subtype, which doubles as the file extension, eg: `image/jpeg` ->
    /// `jpeg`. Parameters are ignored (`text/plain; charset=utf-8` -> `plain`).
    #[must_use]
    pub fn file_extension(&self) -> Option<&str> {
        let (_, subtype) = self.mime_type.split_once(MIME_SUBTYPE_SEPARATOR)?;
        let subtype = subtype
            .split(MIME_PARAMETER_SEPARATOR)
            .next()
            .unwrap_or_default()
            .trim();
        if subtype.is_empty() { None } else { Some(subtype) }
    }

    /// The `filename` written for this payload at `field_path`, eg: `avatar.png`. Falls
    /// back to the bare field path when the MIME type has no subtype.
    #[must_use]
    pub fn file_name_for(&self, field_path: &str) -> String {
        match self.file_extension() {
            Some(extension) => format!("{field_path}.{extension}"),
            None => field_path.to_string(),
        }
    }
}
