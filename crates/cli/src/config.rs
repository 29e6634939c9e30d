// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Layered settings: defaults, config file, environment, flags.
//!
//! Every layer is a [`Layer`] of optional values; higher layers win field by
//! field and [`Settings::from_layer`] fills whatever is still unset.

use crate::output::OutputFormat;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zh_adapters::{JoinStrategy, Scope, DEFAULT_LABEL_KEY};
use zh_engine::{ScanOptions, DEFAULT_CONCURRENCY};

pub const DEFAULT_DAYS: i64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// How Jobs are matched to their CronJob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    /// Owner reference of kind CronJob
    #[default]
    Owner,
    /// Label `<label-key>=<cronjob name>`
    Label,
}

/// One layer of optional settings. Also the config file schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layer {
    pub days: Option<i64>,
    pub namespace: Option<String>,
    pub format: Option<OutputFormat>,
    pub join: Option<JoinMode>,
    pub label_key: Option<String>,
    pub concurrency: Option<usize>,
}

impl Layer {
    /// Values set in `higher` replace ours.
    pub fn overlay(self, higher: Layer) -> Layer {
        Layer {
            days: higher.days.or(self.days),
            namespace: higher.namespace.or(self.namespace),
            format: higher.format.or(self.format),
            join: higher.join.or(self.join),
            label_key: higher.label_key.or(self.label_key),
            concurrency: higher.concurrency.or(self.concurrency),
        }
    }

    /// Environment layer.
    pub fn from_env() -> Layer {
        Layer { concurrency: crate::env::concurrency(), ..Layer::default() }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub days: i64,
    pub scope: Scope,
    pub format: OutputFormat,
    pub join: JoinStrategy,
    pub concurrency: usize,
}

impl Settings {
    pub fn from_layer(layer: Layer) -> Self {
        let join = match layer.join.unwrap_or_default() {
            JoinMode::Owner => JoinStrategy::OwnerReference,
            JoinMode::Label => {
                let key = layer.label_key.unwrap_or_else(|| DEFAULT_LABEL_KEY.to_string());
                JoinStrategy::label(key)
            }
        };
        Self {
            days: layer.days.unwrap_or(DEFAULT_DAYS),
            scope: layer.namespace.as_deref().map(Scope::parse).unwrap_or_default(),
            format: layer.format.unwrap_or_default(),
            join,
            concurrency: layer.concurrency.unwrap_or(DEFAULT_CONCURRENCY).max(1),
        }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(self.days).scope(self.scope.clone()).concurrency(self.concurrency)
    }
}

/// Load the config file layer.
///
/// `explicit` comes from `--config`, falling back to `ZH_CONFIG`; an explicit
/// path must exist. The default location is optional.
pub fn load(explicit: Option<&Path>) -> Result<Layer, ConfigError> {
    let explicit = explicit.map(Path::to_path_buf).or_else(crate::env::config_path);
    match explicit {
        Some(path) => read(&path),
        None => match crate::env::default_config_path() {
            Some(path) if path.is_file() => read(&path),
            _ => Ok(Layer::default()),
        },
    }
}

fn read(path: &Path) -> Result<Layer, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let layer = toml::from_str(&text)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(layer)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
