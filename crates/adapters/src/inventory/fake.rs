// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory inventory for tests

use super::{Inventory, InventoryError, Scope};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use zh_core::{JobExecutionRecord, ScheduledJobRecord};

/// Recorded inventory call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCall {
    ScheduledJobs { scope: Scope },
    Executions { namespace: String, name: String },
}

type Key = (String, String);

#[derive(Default)]
struct FakeState {
    jobs: Vec<ScheduledJobRecord>,
    executions: HashMap<Key, Vec<JobExecutionRecord>>,
    failing_lookups: HashSet<Key>,
    listing_error: Option<String>,
    calls: Vec<InventoryCall>,
}

/// Fake inventory for testing
#[derive(Clone, Default)]
pub struct FakeInventory {
    inner: Arc<Mutex<FakeState>>,
}

fn key(job: &ScheduledJobRecord) -> Key {
    (job.namespace.clone(), job.name.clone())
}

impl FakeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scheduled job with its execution history. Jobs are listed in
    /// insertion order.
    pub fn add(&self, job: ScheduledJobRecord, executions: Vec<JobExecutionRecord>) {
        let mut inner = self.inner.lock();
        inner.executions.insert(key(&job), executions);
        inner.jobs.push(job);
    }

    /// Make the execution lookup for `namespace/name` fail.
    pub fn fail_lookup(&self, namespace: &str, name: &str) {
        self.inner.lock().failing_lookups.insert((namespace.to_string(), name.to_string()));
    }

    /// Make scheduled-job listing fail.
    pub fn fail_listing(&self, message: &str) {
        self.inner.lock().listing_error = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<InventoryCall> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl Inventory for FakeInventory {
    async fn scheduled_jobs(
        &self,
        scope: &Scope,
    ) -> Result<Vec<ScheduledJobRecord>, InventoryError> {
        let mut inner = self.inner.lock();
        inner.calls.push(InventoryCall::ScheduledJobs { scope: scope.clone() });
        if let Some(message) = &inner.listing_error {
            return Err(InventoryError::Unavailable(message.clone()));
        }
        Ok(inner.jobs.iter().filter(|j| scope.contains(&j.namespace)).cloned().collect())
    }

    async fn executions(
        &self,
        job: &ScheduledJobRecord,
    ) -> Result<Vec<JobExecutionRecord>, InventoryError> {
        let mut inner = self.inner.lock();
        inner.calls.push(InventoryCall::Executions {
            namespace: job.namespace.clone(),
            name: job.name.clone(),
        });
        let key = key(job);
        if inner.failing_lookups.contains(&key) {
            return Err(InventoryError::Unavailable(format!("jobs for {}", job)));
        }
        Ok(inner.executions.get(&key).cloned().unwrap_or_default())
    }
}
