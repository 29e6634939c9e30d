// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Offline inventory read from a JSON snapshot.
//!
//! Accepts the output of `kubectl get cronjobs,jobs -A -o json`: a list
//! document whose `items` mix CronJobs and Jobs. Items are dispatched on
//! their `kind`; anything else is ignored.

use super::convert;
use super::{Inventory, InventoryError, JoinStrategy, Scope};
use async_trait::async_trait;
use k8s_openapi::api::batch::v1::{CronJob, Job};
use serde::Deserialize;
use std::path::Path;
use zh_core::{JobExecutionRecord, ScheduledJobRecord};

#[derive(Deserialize)]
struct ListDocument {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

/// Inventory over a fixed snapshot of CronJobs and Jobs.
#[derive(Debug)]
pub struct FileInventory {
    cron_jobs: Vec<CronJob>,
    jobs: Vec<Job>,
    join: JoinStrategy,
}

impl FileInventory {
    pub fn load(path: &Path, join: JoinStrategy) -> Result<Self, InventoryError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| InventoryError::SnapshotIo { path: path.to_path_buf(), source })?;
        let inventory = Self::from_json(&text, join)
            .map_err(|source| InventoryError::SnapshotFormat { path: path.to_path_buf(), source })?;
        tracing::debug!(
            path = %path.display(),
            cron_jobs = inventory.cron_jobs.len(),
            jobs = inventory.jobs.len(),
            "loaded inventory snapshot"
        );
        Ok(inventory)
    }

    pub fn from_json(text: &str, join: JoinStrategy) -> Result<Self, serde_json::Error> {
        let document: ListDocument = serde_json::from_str(text)?;
        let mut cron_jobs = Vec::new();
        let mut jobs = Vec::new();
        for item in document.items {
            match item.get("kind").and_then(|k| k.as_str()) {
                Some("CronJob") => cron_jobs.push(serde_json::from_value(item)?),
                Some("Job") => jobs.push(serde_json::from_value(item)?),
                other => tracing::debug!(kind = ?other, "skipping snapshot item"),
            }
        }
        Ok(Self { cron_jobs, jobs, join })
    }
}

#[async_trait]
impl Inventory for FileInventory {
    async fn scheduled_jobs(
        &self,
        scope: &Scope,
    ) -> Result<Vec<ScheduledJobRecord>, InventoryError> {
        Ok(self
            .cron_jobs
            .iter()
            .filter_map(convert::scheduled_job)
            .filter(|job| scope.contains(&job.namespace))
            .collect())
    }

    async fn executions(
        &self,
        job: &ScheduledJobRecord,
    ) -> Result<Vec<JobExecutionRecord>, InventoryError> {
        Ok(self
            .jobs
            .iter()
            .filter(|j| convert::belongs_to(j, job, &self.join))
            .map(convert::execution)
            .collect())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
