// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution records and their normalized outcome.
//!
//! Inventory sources describe a finished run in one of two shapes: raw
//! succeeded/failed pod counters, or a list of status conditions. Both are
//! carried on [`JobExecutionRecord`] and collapsed by
//! [`JobExecutionRecord::outcome`], so the aggregator never sees either
//! schema directly.
//!
//! A run is *failed* when its failed counter is positive or a `Failed` /
//! `FailureTarget` condition is true. It is *succeeded* when its succeeded
//! counter is positive or a `Complete` / `SuccessCriteriaMet` condition is
//! true. The two are not exclusive: a run that failed a pod and then
//! succeeded on retry is both. A run that is neither (still running, or with
//! no status at all) still counts toward the total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of a status condition reported on an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionKind {
    Complete,
    Failed,
    SuccessCriteriaMet,
    FailureTarget,
    /// Any condition type the classifier does not interpret
    /// (e.g. `Suspended`).
    Other,
}

impl ConditionKind {
    /// Map a condition type string as reported by the cluster.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "Complete" => Self::Complete,
            "Failed" => Self::Failed,
            "SuccessCriteriaMet" => Self::SuccessCriteriaMet,
            "FailureTarget" => Self::FailureTarget,
            _ => Self::Other,
        }
    }

    fn signals_success(self) -> bool {
        matches!(self, Self::Complete | Self::SuccessCriteriaMet)
    }

    fn signals_failure(self) -> bool {
        matches!(self, Self::Failed | Self::FailureTarget)
    }
}

crate::simple_display! {
    ConditionKind {
        Complete => "Complete",
        Failed => "Failed",
        SuccessCriteriaMet => "SuccessCriteriaMet",
        FailureTarget => "FailureTarget",
        Other => "Other",
    }
}

/// One status condition on an execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionCondition {
    pub kind: ConditionKind,
    /// `true` when the condition's status is `"True"`.
    pub status: bool,
    pub last_transition: Option<DateTime<Utc>>,
}

impl ExecutionCondition {
    pub fn new(kind: ConditionKind, status: bool, last_transition: Option<DateTime<Utc>>) -> Self {
        Self { kind, status, last_transition }
    }
}

/// One past run of a scheduled job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobExecutionRecord {
    pub name: String,
    /// Number of pods that reached phase Succeeded.
    #[serde(default)]
    pub succeeded: u32,
    /// Number of pods that reached phase Failed.
    #[serde(default)]
    pub failed: u32,
    /// Absent while the run has not completed.
    #[serde(default)]
    pub completion_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub conditions: Vec<ExecutionCondition>,
}

/// Normalized view of a [`JobExecutionRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub succeeded: bool,
    pub failed: bool,
    /// When the run finished successfully, if known.
    pub finished_at: Option<DateTime<Utc>>,
}

impl ExecutionOutcome {
    /// The finish time, only for runs that succeeded.
    pub fn success_time(&self) -> Option<DateTime<Utc>> {
        if self.succeeded {
            self.finished_at
        } else {
            None
        }
    }
}

impl JobExecutionRecord {
    pub fn outcome(&self) -> ExecutionOutcome {
        let success = self.true_condition(ConditionKind::signals_success);
        let failure = self.true_condition(ConditionKind::signals_failure);
        ExecutionOutcome {
            succeeded: self.succeeded > 0 || success.is_some(),
            failed: self.failed > 0 || failure.is_some(),
            finished_at: self.completion_time.or_else(|| success.and_then(|c| c.last_transition)),
        }
    }

    fn true_condition(&self, pred: fn(ConditionKind) -> bool) -> Option<&ExecutionCondition> {
        self.conditions.iter().find(|c| c.status && pred(c.kind))
    }
}

crate::builder! {
    pub struct JobExecutionRecordBuilder => JobExecutionRecord {
        into {
            name: String = "job-1",
            completion_time: Option<DateTime<Utc>> = None::<DateTime<Utc>>,
        }
        set {
            succeeded: u32 = 0,
            failed: u32 = 0,
            conditions: Vec<ExecutionCondition> = Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "execution_tests.rs"]
mod tests;
