// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod json;
pub mod log;
pub mod network;
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use json::*;
pub use log::*;
pub use network::*;
pub use test_fixtures::*;
