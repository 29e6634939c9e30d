// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution aggregator: history → recency and failure counts.

use crate::execution::JobExecutionRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Days-since-success value meaning "no success ever observed".
pub const NEVER_SUCCEEDED: i64 = 999;

/// Scalars the classifier needs from one scheduled job's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionMetrics {
    /// Whole days since the latest success, or [`NEVER_SUCCEEDED`].
    pub days_since_success: i64,
    pub total: usize,
    pub failed: usize,
    pub last_success: Option<DateTime<Utc>>,
}

impl ExecutionMetrics {
    /// Metrics for a job with no known executions.
    pub fn empty() -> Self {
        Self { days_since_success: NEVER_SUCCEEDED, total: 0, failed: 0, last_success: None }
    }

    pub fn all_failed(&self) -> bool {
        self.total > 0 && self.failed == self.total
    }
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Reduce a job's execution history, measuring recency against `now`.
///
/// Successes without a completion time are skipped when picking the latest
/// success; they still count toward `total`.
pub fn aggregate(records: &[JobExecutionRecord], now: DateTime<Utc>) -> ExecutionMetrics {
    let mut failed = 0;
    let mut last_success: Option<DateTime<Utc>> = None;

    for outcome in records.iter().map(JobExecutionRecord::outcome) {
        if outcome.failed {
            failed += 1;
        }
        if let Some(at) = outcome.success_time() {
            last_success = Some(last_success.map_or(at, |latest| latest.max(at)));
        }
    }

    ExecutionMetrics {
        days_since_success: last_success.map_or(NEVER_SUCCEEDED, |at| days_between(at, now)),
        total: records.len(),
        failed,
        last_success,
    }
}

/// Whole days from `earlier` to `now`, floored, never negative.
///
/// Timestamps ahead of `now` (clock skew between cluster and caller) count
/// as zero days.
pub fn days_between(earlier: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ((now - earlier).num_hours() / 24).max(0)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
