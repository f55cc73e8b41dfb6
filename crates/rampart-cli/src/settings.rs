// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process settings loaded from `RAMPART_*` environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub const ENV_PREFIX: &str = "RAMPART";

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Validated settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Tracing filter directive, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".into()
}

impl Settings {
    /// Load and validate settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn from_environment(env: config::Environment) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(env)
            .build()
            .context("failed to build rampart settings")?;

        let settings: Settings = cfg
            .try_deserialize()
            .context("failed to deserialise rampart settings")?;

        settings.validate()?;
        Ok(settings)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            anyhow::bail!("RAMPART_LOG_LEVEL must not be empty");
        }
        EnvFilter::try_new(&self.log_level).with_context(|| {
            format!("RAMPART_LOG_LEVEL is not a valid filter: {}", self.log_level)
        })?;
        Ok(())
    }
}
