// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod json_cast;

// Re-export.
pub use json_cast::*;
