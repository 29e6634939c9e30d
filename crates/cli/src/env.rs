// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Config file path override.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("ZH_CONFIG").filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Maximum concurrent history lookups. Unparseable values are ignored.
pub fn concurrency() -> Option<usize> {
    std::env::var("ZH_CONCURRENCY").ok().and_then(|v| v.parse().ok())
}

/// Log filter directive: ZH_LOG > RUST_LOG
pub fn log_filter() -> Option<String> {
    std::env::var("ZH_LOG").or_else(|_| std::env::var("RUST_LOG")).ok().filter(|v| !v.is_empty())
}

/// Default config file: `<config dir>/zombie-hunter/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zombie-hunter").join("config.toml"))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
