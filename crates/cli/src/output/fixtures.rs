// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hand-built reports for renderer tests.

use chrono::{DateTime, TimeZone, Utc};
use zh_adapters::Scope;
use zh_core::{ConfidenceReason, ZombieVerdict, NEVER_SUCCEEDED};
use zh_engine::ScanReport;

pub fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
}

pub fn zombie(name: &str, days: i64, reason: ConfidenceReason) -> ZombieVerdict {
    let last_success =
        (days < NEVER_SUCCEEDED).then(|| generated_at() - chrono::Duration::days(days));
    ZombieVerdict {
        name: name.to_string(),
        namespace: "batch".to_string(),
        schedule: "0 3 * * *".to_string(),
        last_success,
        days_since_success: days,
        total_jobs: 3,
        failed_jobs: 1,
        confidence: reason.score(),
        is_suspended: reason == ConfidenceReason::Suspended,
        is_zombie: true,
        reason: Some(reason),
        history_unavailable: false,
    }
}

pub fn healthy(name: &str) -> ZombieVerdict {
    ZombieVerdict {
        confidence: 0,
        is_zombie: false,
        reason: None,
        ..zombie(name, 2, ConfidenceReason::Recent)
    }
}

pub fn report(verdicts: Vec<ZombieVerdict>) -> ScanReport {
    ScanReport { generated_at: generated_at(), threshold_days: 30, scope: Scope::All, verdicts }
}
