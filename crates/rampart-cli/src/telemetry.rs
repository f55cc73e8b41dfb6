// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Logging goes to stderr so stdout carries only the command summary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::settings::{LogFormat, Settings};

/// Initialise the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(settings: &Settings) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match settings.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}
