// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lightweight inline markup made of single character tags, eg:
//! `"Tap <b>here</b> to <i>continue</i>"`. Tags never nest, have no attributes, and
//! are never self closing. See [`split_by_tag_names()`] for the grammar, and
//! [`AttributedText`] to turn the result into styled spans.

// Attach sources.
pub mod attributed_text;
pub mod split_by_tag_names;
pub mod tagged_text_constants;
pub mod tagged_text_error;
pub mod tagged_text_types;

// Re-export.
pub use attributed_text::*;
pub use split_by_tag_names::*;
pub use tagged_text_constants::*;
pub use tagged_text_error::*;
pub use tagged_text_types::*;
