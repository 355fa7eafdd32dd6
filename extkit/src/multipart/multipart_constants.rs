// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// All the wire literals used to write a `multipart/form-data` body.
pub const CRLF: &str = "\r\n";
pub const BOUNDARY_DASHES: &str = "--";
pub const CONTENT_DISPOSITION_FORM_DATA: &str = "Content-Disposition: form-data";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const MULTIPART_FORM_DATA_MIME: &str = "multipart/form-data";

/// Separates a MIME type from its subtype, eg: `image/jpeg`.
pub const MIME_SUBTYPE_SEPARATOR: char = '/';

/// Starts the parameters of a MIME type, eg: `text/plain; charset=utf-8`.
pub const MIME_PARAMETER_SEPARATOR: char = ';';

/// Set this to `true` to trace every section as it is written.
pub const DEBUG_MULTIPART: bool = false;
