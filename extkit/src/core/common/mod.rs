// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod collection_ext;
pub mod common_atomic;
pub mod sizes;
pub mod string_helper;

// Re-export.
pub use collection_ext::*;
pub use common_atomic::*;
pub use sizes::*;
pub use string_helper::*;
