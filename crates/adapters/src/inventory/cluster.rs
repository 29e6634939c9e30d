// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live cluster inventory backed by `kube-rs`.
//!
//! The handle is created once per run with [`KubeInventory::connect`] and
//! passed to the scanner. Owner-reference joins list every Job in a
//! namespace, so those listings are cached on the handle: a namespace with N
//! CronJobs costs one Job listing, not N.

use super::convert;
use super::{Inventory, InventoryError, JoinStrategy, Scope};
use async_trait::async_trait;
use k8s_openapi::api::batch::v1::{CronJob, Job};
use kube::api::{Api, ListParams};
use kube::config::{Config, KubeConfigOptions};
use kube::Client;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::OnceCell;
use zh_core::{JobExecutionRecord, ScheduledJobRecord};

/// Objects requested per list call.
const PAGE_SIZE: u32 = 500;

type JobCache = HashMap<String, Arc<OnceCell<Arc<Vec<Job>>>>>;

/// Inventory that reads CronJobs and Jobs from the Kubernetes API.
pub struct KubeInventory {
    client: Client,
    join: JoinStrategy,
    jobs_by_namespace: Mutex<JobCache>,
}

impl KubeInventory {
    /// Connect using in-cluster config, falling back to the local kubeconfig
    /// (`KUBECONFIG` or `~/.kube/config`).
    pub async fn connect(join: JoinStrategy) -> Result<Self, InventoryError> {
        let config = match Config::incluster() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(error = %e, "no in-cluster config, trying kubeconfig");
                Config::from_kubeconfig(&KubeConfigOptions::default())
                    .await
                    .map_err(InventoryError::Kubeconfig)?
            }
        };
        let client = Client::try_from(config).map_err(InventoryError::Connect)?;
        tracing::debug!(%join, "connected to Kubernetes API");
        Ok(Self::with_client(client, join))
    }

    pub fn with_client(client: Client, join: JoinStrategy) -> Self {
        Self { client, join, jobs_by_namespace: Mutex::new(HashMap::new()) }
    }

    /// All Jobs in `namespace`, listed once per handle.
    async fn namespace_jobs(&self, namespace: &str) -> Result<Arc<Vec<Job>>, InventoryError> {
        let cell = self.jobs_by_namespace.lock().entry(namespace.to_string()).or_default().clone();
        let jobs = cell.get_or_try_init(|| self.list_jobs(namespace, ListParams::default())).await?;
        Ok(Arc::clone(jobs))
    }

    async fn list_jobs(
        &self,
        namespace: &str,
        params: ListParams,
    ) -> Result<Arc<Vec<Job>>, InventoryError> {
        let api: Api<Job> = Api::namespaced(self.client.clone(), namespace);
        let jobs = list_all(&api, params).await.map_err(|source| InventoryError::List {
            resource: "jobs",
            scope: format!("namespace {}", namespace),
            source,
        })?;
        tracing::debug!(namespace, count = jobs.len(), "listed jobs");
        Ok(Arc::new(jobs))
    }
}

#[async_trait]
impl Inventory for KubeInventory {
    async fn scheduled_jobs(
        &self,
        scope: &Scope,
    ) -> Result<Vec<ScheduledJobRecord>, InventoryError> {
        let api: Api<CronJob> = match scope.namespace() {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let cron_jobs = list_all(&api, ListParams::default()).await.map_err(|source| {
            InventoryError::List { resource: "cronjobs", scope: scope.to_string(), source }
        })?;
        tracing::debug!(%scope, count = cron_jobs.len(), "listed cronjobs");
        Ok(cron_jobs.iter().filter_map(convert::scheduled_job).collect())
    }

    async fn executions(
        &self,
        job: &ScheduledJobRecord,
    ) -> Result<Vec<JobExecutionRecord>, InventoryError> {
        match &self.join {
            JoinStrategy::OwnerReference => {
                let jobs = self.namespace_jobs(&job.namespace).await?;
                Ok(jobs
                    .iter()
                    .filter(|j| convert::belongs_to(j, job, &self.join))
                    .map(convert::execution)
                    .collect())
            }
            JoinStrategy::Label { key } => {
                let params = ListParams::default().labels(&convert::label_selector(key, job));
                let jobs = self.list_jobs(&job.namespace, params).await?;
                Ok(jobs.iter().map(convert::execution).collect())
            }
        }
    }
}

/// List every object matching `params`, following continue tokens.
async fn list_all<K>(api: &Api<K>, params: ListParams) -> Result<Vec<K>, kube::Error>
where
    K: Clone + DeserializeOwned + Debug,
{
    let mut params = params.limit(PAGE_SIZE);
    let mut items = Vec::new();
    loop {
        let page = api.list(&params).await?;
        items.extend(page.items);
        match page.metadata.continue_ {
            Some(token) if !token.is_empty() => params = params.continue_token(&token),
            _ => break,
        }
    }
    Ok(items)
}

#[cfg(test)]
#[path = "cluster_tests.rs"]
mod tests;
