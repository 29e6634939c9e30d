// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{ConditionKind, ExecutionCondition, JobExecutionRecord};
use chrono::{DateTime, TimeDelta, Utc};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core classifier types.
pub mod strategies {
    use crate::{ExecutionMetrics, NEVER_SUCCEEDED};
    use proptest::prelude::*;

    /// Metrics where `failed <= total` and a job with no runs never succeeded.
    pub fn arb_metrics() -> impl Strategy<Value = ExecutionMetrics> {
        (0usize..50, 0i64..=NEVER_SUCCEEDED)
            .prop_flat_map(|(total, days)| (Just(total), 0..=total, Just(days)))
            .prop_map(|(total, failed, days)| ExecutionMetrics {
                days_since_success: if total == 0 { NEVER_SUCCEEDED } else { days },
                total,
                failed,
                last_success: None,
            })
    }

    pub fn arb_threshold() -> impl Strategy<Value = i64> {
        -30i64..1200
    }
}

// ── Record factory functions ────────────────────────────────────────────

pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - TimeDelta::days(days)
}

/// Counter-shaped run that succeeded `days` before `now`.
pub fn succeeded_days_ago(name: &str, now: DateTime<Utc>, days: i64) -> JobExecutionRecord {
    JobExecutionRecord::builder()
        .name(name)
        .succeeded(1)
        .completion_time(days_before(now, days))
        .build()
}

/// Counter-shaped run that failed. Failed runs carry no completion time.
pub fn failed_run(name: &str) -> JobExecutionRecord {
    JobExecutionRecord::builder().name(name).failed(1).build()
}

/// Condition-shaped run with a single true condition `days` before `now`.
pub fn condition_days_ago(
    name: &str,
    kind: ConditionKind,
    now: DateTime<Utc>,
    days: i64,
) -> JobExecutionRecord {
    JobExecutionRecord::builder()
        .name(name)
        .conditions(vec![ExecutionCondition::new(kind, true, Some(days_before(now, days)))])
        .build()
}
