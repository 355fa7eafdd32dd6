// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # extkit
//!
//! General purpose extensions and helpers for application development. The crate is
//! organized in three parts:
//!
//! 1. [`tagged_text`] - split a string containing lightweight single character tags
//!    (`"Lorem <b>ipsum</b> dolor"`) into an ordered list of [`TaggedComponent`]s, and
//!    turn those into styled spans with [`AttributedText`].
//! 2. [`multipart`] - encode a tree of form values and a tree of file payloads into a
//!    single `multipart/form-data` body with bracket qualified field names
//!    (`gallery[images][0]`). See [`MultipartFormDataBuilder`].
//! 3. [`core`] - the small reusable utilities and the ambient stack: collection
//!    extensions, atomic counters and async containers, JSON casting, a thin HTTP client
//!    wrapper, and [`tracing`] based logging setup.
//!
//! # Splitting tagged text
//!
//! ```
//! use extkit::{TaggedComponent, SplitByTagNames, tag_names};
//!
//! let tags = tag_names!['b', 'c'];
//! let components = "Lorem <b>ipsum</b> dolor".split_by_tag_names(&tags).unwrap();
//! assert_eq!(
//!     components.as_slice(),
//!     &[
//!         TaggedComponent::plain("Lorem "),
//!         TaggedComponent::tagged('b', "ipsum"),
//!         TaggedComponent::plain(" dolor"),
//!     ]
//! );
//! ```
//!
//! # Encoding multipart form data
//!
//! ```
//! use extkit::{FieldMap, FieldValue, FileMap, MultipartFormDataBuilder};
//!
//! let mut values = FieldMap::new();
//! values.insert("first".into(), FieldValue::from("Vakhtang"));
//!
//! let form = MultipartFormDataBuilder::new(values, FileMap::new()).build();
//! assert!(form.content_type().starts_with("multipart/form-data; boundary="));
//! assert!(form.body.ends_with(format!("--{}--\r\n", form.boundary).as_bytes()));
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod multipart;
pub mod tagged_text;

// Re-export.
pub use core::*;
pub use multipart::*;
pub use tagged_text::*;
