// Copyright 2024 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Configures a suitable default [`tracing`] implementation for apps hosting a text editor.
//!
//! This uses a compact log format: the time of day in UTC with millisecond precision,
//! and no target.
//! It also uses a default filter, which can be overwritten using `RUST_LOG`.
//! This will include all [`DEBUG`](tracing::Level::DEBUG) messages in debug mode,
//! and all [`INFO`](tracing::Level::INFO) level messages in release mode.
//!
//! If a `tracing` backend is already configured, this will not overwrite that.

use time::macros::format_description;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Initialise tracing with the given `default_level`.
fn try_init_layered_tracing(default_level: LevelFilter) -> Result<(), SetGlobalDefaultError> {
    // Use EnvFilter to allow the user to override the log level without recompiling.
    let env_filter_builder = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG");
    // We store the error until our env is set, *then* we display it
    let env_var_error = env_filter_builder.from_env().err();
    let env_filter = env_filter_builder.from_env_lossy();

    let timer = UtcTime::new(format_description!(
        // We append a `Z` here to indicate clearly that this is a UTC time
        "[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    // If modifying, also update the module level docs
    let console_layer = tracing_subscriber::fmt::layer()
        .with_timer(timer)
        .with_target(false)
        .with_filter(env_filter);

    let registry = tracing_subscriber::registry().with(console_layer);
    tracing::dispatcher::set_global_default(registry.into())?;

    if let Some(err) = env_var_error {
        tracing::error!(
            err = &err as &dyn std::error::Error,
            "Failed to parse RUST_LOG environment variable"
        );
    }
    Ok(())
}

/// Initialise tracing for a test, suppressing everything below [`WARN`](tracing::Level::WARN)
/// unless `RUST_LOG` says otherwise.
pub fn try_init_test_tracing() -> Result<(), SetGlobalDefaultError> {
    try_init_layered_tracing(LevelFilter::WARN)
}

/// Initialise tracing for an end-user application.
pub fn try_init_tracing() -> Result<(), SetGlobalDefaultError> {
    // Default level is DEBUG in --dev, INFO in --release, unless a level is passed.
    // DEBUG prints one log per user edit.
    // INFO should only print logs for noteworthy things.
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    try_init_layered_tracing(default_level)
}
