// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduled job definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled job (CronJob) as seen by the classifier.
///
/// The schedule expression is carried through to reports verbatim and never
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJobRecord {
    pub name: String,
    pub namespace: String,
    pub schedule: String,
    #[serde(default)]
    pub suspended: bool,
}

impl ScheduledJobRecord {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        schedule: impl Into<String>,
        suspended: bool,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            schedule: schedule.into(),
            suspended,
        }
    }
}

/// Renders as `namespace/name`.
impl fmt::Display for ScheduledJobRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

crate::builder! {
    pub struct ScheduledJobRecordBuilder => ScheduledJobRecord {
        into {
            name: String = "nightly-report",
            namespace: String = "default",
            schedule: String = "0 0 * * *",
        }
        set {
            suspended: bool = false,
        }
    }
}
