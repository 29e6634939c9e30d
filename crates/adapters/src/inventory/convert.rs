// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kubernetes objects → core records.
//!
//! Shared by the live and snapshot inventories so both see identical
//! records for identical objects.

use super::JoinStrategy;
use k8s_openapi::api::batch::v1::{CronJob, Job, JobCondition};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use zh_core::{ConditionKind, ExecutionCondition, JobExecutionRecord, ScheduledJobRecord};

/// Namespace assumed for objects that omit one.
const DEFAULT_NAMESPACE: &str = "default";

/// `None` for objects without a name (never true for objects read from the API).
pub(crate) fn scheduled_job(cron: &CronJob) -> Option<ScheduledJobRecord> {
    let name = cron.metadata.name.clone()?;
    let spec = cron.spec.as_ref();
    Some(ScheduledJobRecord {
        name,
        namespace: namespace_of(&cron.metadata),
        schedule: spec.map(|s| s.schedule.clone()).unwrap_or_default(),
        suspended: spec.and_then(|s| s.suspend).unwrap_or(false),
    })
}

pub(crate) fn execution(job: &Job) -> JobExecutionRecord {
    let status = job.status.as_ref();
    JobExecutionRecord {
        name: job.metadata.name.clone().unwrap_or_default(),
        succeeded: count(status.and_then(|s| s.succeeded)),
        failed: count(status.and_then(|s| s.failed)),
        completion_time: status.and_then(|s| s.completion_time.as_ref()).map(|t| t.0),
        conditions: status
            .and_then(|s| s.conditions.as_ref())
            .map(|conds| conds.iter().map(condition).collect())
            .unwrap_or_default(),
    }
}

fn condition(cond: &JobCondition) -> ExecutionCondition {
    ExecutionCondition::new(
        ConditionKind::parse(&cond.type_),
        cond.status == "True",
        cond.last_transition_time.as_ref().map(|t| t.0),
    )
}

/// Negative counters are invalid and read as zero.
fn count(value: Option<i32>) -> u32 {
    value.and_then(|v| u32::try_from(v).ok()).unwrap_or(0)
}

pub(crate) fn namespace_of(meta: &ObjectMeta) -> String {
    meta.namespace.clone().unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
}

/// Whether `job` is an execution of `scheduled` under `strategy`.
///
/// Namespace must match for both strategies; a CronJob only ever creates
/// Jobs in its own namespace.
pub(crate) fn belongs_to(
    job: &Job,
    scheduled: &ScheduledJobRecord,
    strategy: &JoinStrategy,
) -> bool {
    if namespace_of(&job.metadata) != scheduled.namespace {
        return false;
    }
    match strategy {
        JoinStrategy::OwnerReference => job
            .metadata
            .owner_references
            .iter()
            .flatten()
            .any(|owner| owner.kind == "CronJob" && owner.name == scheduled.name),
        JoinStrategy::Label { key } => job
            .metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get(key))
            .is_some_and(|value| *value == scheduled.name),
    }
}

/// Label selector equivalent of [`belongs_to`] for server-side filtering.
pub(crate) fn label_selector(key: &str, scheduled: &ScheduledJobRecord) -> String {
    format!("{}={}", key, scheduled.name)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
