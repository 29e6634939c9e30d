// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classifier output handed to the reporting layer.

use crate::aggregate::NEVER_SUCCEEDED;
use crate::classify::ConfidenceReason;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confidence at or above which a zombie counts as high confidence.
pub const HIGH_CONFIDENCE: u8 = 80;

/// Verdict for one scheduled job in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZombieVerdict {
    pub name: String,
    pub namespace: String,
    pub schedule: String,
    pub last_success: Option<DateTime<Utc>>,
    pub days_since_success: i64,
    pub total_jobs: usize,
    pub failed_jobs: usize,
    /// 0 unless `is_zombie`.
    pub confidence: u8,
    pub is_suspended: bool,
    pub is_zombie: bool,
    /// Rule that produced `confidence`; `None` when not a zombie.
    pub reason: Option<ConfidenceReason>,
    /// Set when the execution history could not be fetched.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub history_unavailable: bool,
}

impl ZombieVerdict {
    pub fn is_high_confidence(&self) -> bool {
        self.is_zombie && self.confidence >= HIGH_CONFIDENCE
    }

    pub fn never_succeeded(&self) -> bool {
        self.last_success.is_none() && self.days_since_success >= NEVER_SUCCEEDED
    }
}
