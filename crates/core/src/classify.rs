// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Zombie classifier: metrics + suspension + threshold → verdict.
//!
//! Confidence comes from [`RULES`], an ordered table where the first
//! matching rule wins. The predicates overlap (a suspended job that failed
//! every run for a year matches rules 1, 3 and 4), so order is part of the
//! behavior: suspension caps confidence at 20 because a paused job is more
//! likely intentional than abandoned.

use crate::aggregate::{aggregate, ExecutionMetrics};
use crate::execution::JobExecutionRecord;
use crate::scheduled::ScheduledJobRecord;
use crate::verdict::ZombieVerdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a zombie received its confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceReason {
    Suspended,
    NeverRan,
    AllFailed,
    InactiveYear,
    InactiveHalfYear,
    InactiveQuarter,
    InactiveTwoMonths,
    InactiveMonth,
    Recent,
    /// Execution history lookup failed; not part of [`RULES`].
    HistoryUnavailable,
}

impl ConfidenceReason {
    pub fn score(self) -> u8 {
        match self {
            Self::Suspended => 20,
            Self::NeverRan => 50,
            Self::AllFailed => 95,
            Self::InactiveYear => 99,
            Self::InactiveHalfYear => 95,
            Self::InactiveQuarter => 85,
            Self::InactiveTwoMonths => 75,
            Self::InactiveMonth => 60,
            Self::Recent => 40,
            Self::HistoryUnavailable => 50,
        }
    }
}

crate::simple_display! {
    ConfidenceReason {
        Suspended => "suspended",
        NeverRan => "never ran",
        AllFailed => "all runs failed",
        InactiveYear => "no success in 365+ days",
        InactiveHalfYear => "no success in 180+ days",
        InactiveQuarter => "no success in 90+ days",
        InactiveTwoMonths => "no success in 60+ days",
        InactiveMonth => "no success in 30+ days",
        Recent => "no success in under 30 days",
        HistoryUnavailable => "history unavailable",
    }
}

/// Inputs visible to the confidence rules.
#[derive(Debug, Clone, Copy)]
pub struct Signals {
    pub suspended: bool,
    pub days: i64,
    pub total: usize,
    pub failed: usize,
}

impl Signals {
    pub fn new(suspended: bool, metrics: &ExecutionMetrics) -> Self {
        Self {
            suspended,
            days: metrics.days_since_success,
            total: metrics.total,
            failed: metrics.failed,
        }
    }
}

type Rule = (ConfidenceReason, fn(&Signals) -> bool);

/// Evaluated top to bottom; the last rule always matches.
pub const RULES: &[Rule] = &[
    (ConfidenceReason::Suspended, |s| s.suspended),
    (ConfidenceReason::NeverRan, |s| s.total == 0),
    (ConfidenceReason::AllFailed, |s| s.total > 0 && s.failed == s.total),
    (ConfidenceReason::InactiveYear, |s| s.days >= 365),
    (ConfidenceReason::InactiveHalfYear, |s| s.days >= 180),
    (ConfidenceReason::InactiveQuarter, |s| s.days >= 90),
    (ConfidenceReason::InactiveTwoMonths, |s| s.days >= 60),
    (ConfidenceReason::InactiveMonth, |s| s.days >= 30),
    (ConfidenceReason::Recent, |_| true),
];

/// First rule in [`RULES`] that matches.
pub fn score(signals: &Signals) -> ConfidenceReason {
    RULES
        .iter()
        .find(|(_, applies)| applies(signals))
        .map_or(ConfidenceReason::Recent, |(reason, _)| *reason)
}

/// Threshold is inclusive; a job that never ran is always a zombie.
pub fn is_zombie(metrics: &ExecutionMetrics, threshold_days: i64) -> bool {
    metrics.days_since_success >= threshold_days || metrics.total == 0
}

pub fn classify(
    job: &ScheduledJobRecord,
    metrics: &ExecutionMetrics,
    threshold_days: i64,
) -> ZombieVerdict {
    let reason = is_zombie(metrics, threshold_days)
        .then(|| score(&Signals::new(job.suspended, metrics)));
    verdict(job, metrics, reason, false)
}

/// Aggregate `records` against `now`, then classify.
pub fn analyze(
    job: &ScheduledJobRecord,
    records: &[JobExecutionRecord],
    threshold_days: i64,
    now: DateTime<Utc>,
) -> ZombieVerdict {
    classify(job, &aggregate(records, now), threshold_days)
}

/// Verdict for a job whose execution history could not be fetched.
///
/// Always a zombie at a fixed confidence of 50, whatever the suspension
/// state, so one failed lookup is reported rather than dropped.
pub fn degraded(job: &ScheduledJobRecord) -> ZombieVerdict {
    verdict(job, &ExecutionMetrics::empty(), Some(ConfidenceReason::HistoryUnavailable), true)
}

fn verdict(
    job: &ScheduledJobRecord,
    metrics: &ExecutionMetrics,
    reason: Option<ConfidenceReason>,
    history_unavailable: bool,
) -> ZombieVerdict {
    ZombieVerdict {
        name: job.name.clone(),
        namespace: job.namespace.clone(),
        schedule: job.schedule.clone(),
        last_success: metrics.last_success,
        days_since_success: metrics.days_since_success,
        total_jobs: metrics.total,
        failed_jobs: metrics.failed,
        confidence: reason.map_or(0, ConfidenceReason::score),
        is_suspended: job.suspended,
        is_zombie: reason.is_some(),
        reason,
        history_unavailable,
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
