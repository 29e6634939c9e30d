// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zh-core: classification engine for the zombie-hunter CLI tool
//!
//! Everything in this crate is pure. The [`aggregate`] module reduces a
//! scheduled job's execution history to recency and failure counts, and
//! [`classify`] turns those counts into a [`ZombieVerdict`].

pub mod macros;

pub mod aggregate;
pub mod classify;
pub mod clock;
pub mod execution;
pub mod scheduled;
pub mod verdict;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use aggregate::{aggregate, days_between, ExecutionMetrics, NEVER_SUCCEEDED};
pub use classify::{analyze, classify, degraded, is_zombie, score, ConfidenceReason};
pub use clock::{Clock, FakeClock, SystemClock};
#[cfg(any(test, feature = "test-support"))]
pub use execution::JobExecutionRecordBuilder;
pub use execution::{ConditionKind, ExecutionCondition, ExecutionOutcome, JobExecutionRecord};
#[cfg(any(test, feature = "test-support"))]
pub use scheduled::ScheduledJobRecordBuilder;
pub use scheduled::ScheduledJobRecord;
pub use verdict::{ZombieVerdict, HIGH_CONFIDENCE};
