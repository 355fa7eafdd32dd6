// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Encode a tree of form values and a tree of file payloads into one
//! `multipart/form-data` body. Nested containers are flattened into bracket qualified
//! field names, eg: `{"gallery": {"images": [a, b]}}` becomes `gallery[images][0]` and
//! `gallery[images][1]`. See [`MultipartFormDataBuilder`].

// Attach sources.
pub mod field_value_json;
pub mod file_payload;
pub mod flatten_form_tree;
pub mod form_node;
pub mod multipart_builder;
pub mod multipart_constants;
pub mod parts_builders;

// Re-export.
pub use field_value_json::*;
pub use file_payload::*;
pub use flatten_form_tree::*;
pub use form_node::*;
pub use multipart_builder::*;
pub use multipart_constants::*;
pub use parts_builders::*;
