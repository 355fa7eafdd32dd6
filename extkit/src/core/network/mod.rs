// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod http_client;

// Re-export.
pub use http_client::*;
