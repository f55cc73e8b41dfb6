// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::settings::{ENV_PREFIX, LogFormat, Settings};

fn load(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
    let mut map = config::Map::new();
    for (k, v) in vars {
        map.insert((*k).to_string(), (*v).to_string());
    }

    Settings::from_environment(config::Environment::with_prefix(ENV_PREFIX).source(Some(map)))
}

#[test]
fn test_defaults() {
    let settings = load(&[]).expect("defaults load");

    assert_eq!(settings.log_level, "info");
    assert_eq!(settings.log_format, LogFormat::Text);
}

#[test]
fn test_overrides() {
    let settings = load(&[
        ("RAMPART_LOG_LEVEL", "rampart=debug"),
        ("RAMPART_LOG_FORMAT", "json"),
    ])
    .expect("overrides load");

    assert_eq!(settings.log_level, "rampart=debug");
    assert_eq!(settings.log_format, LogFormat::Json);
}

#[test]
fn test_unrelated_variables_are_ignored() {
    let settings = load(&[("HOME", "/root"), ("LOG_LEVEL", "trace")]).expect("load");
    assert_eq!(settings.log_level, "info");
}

#[test]
fn test_rejects_unknown_format() {
    assert!(load(&[("RAMPART_LOG_FORMAT", "xml")]).is_err());
}

#[test]
fn test_validate_rejects_empty_level() {
    let settings = Settings {
        log_level: "  ".into(),
        log_format: LogFormat::Text,
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_directive() {
    let settings = Settings {
        log_level: "rampart=loud".into(),
        log_format: LogFormat::Text,
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_validate_accepts_valid_settings() {
    let settings = Settings {
        log_level: "warn,rampart=debug".into(),
        log_format: LogFormat::Json,
    };
    assert!(settings.validate().is_ok());
}
