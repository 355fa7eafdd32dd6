// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, try_create_layers};
use crate::ok;
use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Global default subscriber, which once set, can't be unset or changed. This is great
/// for apps. Logging is **disabled** by default: nothing in this crate installs a
/// subscriber on its own, it only emits events.
///
/// If the level filter is [`LevelFilter::OFF`] this is a no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The log file can't be created
/// - A global subscriber has already been installed
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    let layers = try_create_layers(&it)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, so different threads (eg: different tests) can log with
/// different configurations. The subscriber is uninstalled when the returned guard is
/// dropped.
///
/// If the level filter is [`LevelFilter::OFF`] this returns `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    let layers = try_create_layers(&it)?;
    let guard = tracing_subscriber::registry().with(layers).set_default();
    ok!(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WriterConfig, try_create_temp_dir};
    use serial_test::serial;

    #[test]
    fn test_logging_off_installs_nothing() {
        let it = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(it.is_none());
    }

    #[test]
    #[serial]
    fn test_thread_local_logging_writes_to_file() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("thread_local.log");
        let file_path_str = file_path.to_str().unwrap().to_string();

        {
            let _guard = try_initialize_logging_thread_local(WriterConfig::File(
                file_path_str.clone(),
            ))
            .unwrap();
            tracing::info!(message = "hello from the test", answer = 42);
        }

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("hello from the test"));
        assert!(content.contains("answer=42"));
    }

    /// The global subscriber can only be installed once per process, and it stays
    /// installed for every other test in it. Writing to a file keeps its output out of
    /// the test runner's stderr.
    #[test]
    #[serial]
    fn test_global_logging_installs_once() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("global.log");
        let file_path_str = file_path.to_str().unwrap().to_string();
        let config = TracingConfig {
            writer_config: WriterConfig::File(file_path_str),
            level_filter: LevelFilter::ERROR,
        };

        assert!(try_initialize_logging_global(config.clone()).is_ok());
        assert!(try_initialize_logging_global(config).is_err());

        // Still a no-op, even once a global subscriber exists.
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());

        tracing::error!(message = "hello from the global subscriber");
        let content = std::fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("hello from the global subscriber"));
    }
}
