// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory adapters
//!
//! An [`Inventory`] answers two questions per run: which scheduled jobs are
//! in scope, and which executions belong to each of them. Backends:
//!
//! - [`KubeInventory`]: live cluster via the Kubernetes API
//! - [`FileInventory`]: offline snapshot (`kubectl get cronjobs,jobs -A -o json`)
//! - `FakeInventory`: in-memory, for tests (`test-support` feature)
//!
//! Executions are joined to their CronJob by [`JoinStrategy`]. Both
//! strategies are expected to return the same logical set for jobs created
//! by the CronJob controller.

mod cluster;
pub(crate) mod convert;
mod file;

pub use cluster::KubeInventory;
pub use file::FileInventory;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeInventory, InventoryCall};

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use zh_core::{JobExecutionRecord, ScheduledJobRecord};

/// Label key used by the label join strategy when none is configured.
pub const DEFAULT_LABEL_KEY: &str = "cronjob";

/// Errors from inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[source] kube::config::KubeconfigError),
    #[error("failed to create Kubernetes client: {0}")]
    Connect(#[source] kube::Error),
    #[error("failed to list {resource} in {scope}: {source}")]
    List {
        resource: &'static str,
        scope: String,
        #[source]
        source: kube::Error,
    },
    #[error("failed to read snapshot {}: {source}", path.display())]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot {}: {source}", path.display())]
    SnapshotFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("inventory unavailable: {0}")]
    Unavailable(String),
}

/// Which namespaces a run covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    All,
    Namespace(String),
}

impl Scope {
    /// `""` and `"all"` select every namespace; anything else is a namespace name.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => Self::All,
            ns => Self::Namespace(ns.to_string()),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Namespace(ns) => Some(ns),
        }
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.namespace().map_or(true, |ns| ns == namespace)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all namespaces"),
            Self::Namespace(ns) => write!(f, "namespace {}", ns),
        }
    }
}

/// How executions are associated with their scheduled job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JoinStrategy {
    /// Owner reference of kind `CronJob` with a matching name.
    #[default]
    OwnerReference,
    /// Label `key=<cronjob name>` on the Job.
    Label { key: String },
}

impl JoinStrategy {
    pub fn label(key: impl Into<String>) -> Self {
        Self::Label { key: key.into() }
    }
}

impl fmt::Display for JoinStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OwnerReference => f.write_str("owner reference"),
            Self::Label { key } => write!(f, "label {}", key),
        }
    }
}

/// Source of scheduled jobs and their execution history.
#[async_trait]
pub trait Inventory: Send + Sync {
    /// Scheduled jobs in `scope`. Failure here aborts the run.
    async fn scheduled_jobs(&self, scope: &Scope)
        -> Result<Vec<ScheduledJobRecord>, InventoryError>;

    /// Executions owned by `job`. Callers treat failure as non-fatal.
    async fn executions(
        &self,
        job: &ScheduledJobRecord,
    ) -> Result<Vec<JobExecutionRecord>, InventoryError>;
}

#[async_trait]
impl<T: Inventory + ?Sized> Inventory for Box<T> {
    async fn scheduled_jobs(
        &self,
        scope: &Scope,
    ) -> Result<Vec<ScheduledJobRecord>, InventoryError> {
        (**self).scheduled_jobs(scope).await
    }

    async fn executions(
        &self,
        job: &ScheduledJobRecord,
    ) -> Result<Vec<JobExecutionRecord>, InventoryError> {
        (**self).executions(job).await
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
