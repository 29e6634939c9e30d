// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scan orchestration: list scheduled jobs, fetch history, classify.
//!
//! History lookups run with at most `concurrency` in flight. Results keep
//! the inventory's order regardless of completion order, and the clock is
//! read once so every verdict in a report shares the same `now`.

use crate::error::ScanError;
use chrono::{DateTime, Utc};
use futures_util::stream::{self, StreamExt};
use std::time::Instant;
use zh_adapters::{Inventory, Scope};
use zh_core::{analyze, degraded, Clock, ScheduledJobRecord, ZombieVerdict};

/// History lookups in flight when none is configured.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Parameters for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub scope: Scope,
    pub threshold_days: i64,
    pub concurrency: usize,
}

impl ScanOptions {
    pub fn new(threshold_days: i64) -> Self {
        Self { scope: Scope::All, threshold_days, concurrency: DEFAULT_CONCURRENCY }
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}

/// Outcome of one scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub generated_at: DateTime<Utc>,
    pub threshold_days: i64,
    pub scope: Scope,
    /// One verdict per scheduled job, in inventory order.
    pub verdicts: Vec<ZombieVerdict>,
}

impl ScanReport {
    pub fn scanned(&self) -> usize {
        self.verdicts.len()
    }

    pub fn zombies(&self) -> impl Iterator<Item = &ZombieVerdict> {
        self.verdicts.iter().filter(|v| v.is_zombie)
    }

    pub fn zombie_count(&self) -> usize {
        self.zombies().count()
    }

    pub fn high_confidence_count(&self) -> usize {
        self.zombies().filter(|v| v.is_high_confidence()).count()
    }

    /// Verdicts whose history lookup failed.
    pub fn degraded_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.history_unavailable).count()
    }
}

/// Classifies every scheduled job an inventory reports.
pub struct Scanner<I, C> {
    inventory: I,
    clock: C,
}

impl<I, C> Scanner<I, C>
where
    I: Inventory,
    C: Clock,
{
    pub fn new(inventory: I, clock: C) -> Self {
        Self { inventory, clock }
    }

    pub async fn scan(&self, options: &ScanOptions) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let now = self.clock.now();
        let jobs = self.inventory.scheduled_jobs(&options.scope).await?;
        tracing::debug!(scope = %options.scope, count = jobs.len(), "scheduled jobs listed");

        let verdicts: Vec<ZombieVerdict> = stream::iter(&jobs)
            .map(|job| self.evaluate(job, options.threshold_days, now))
            .buffered(options.concurrency.max(1))
            .collect()
            .await;

        let report = ScanReport {
            generated_at: now,
            threshold_days: options.threshold_days,
            scope: options.scope.clone(),
            verdicts,
        };
        tracing::info!(
            scope = %report.scope,
            scanned = report.scanned(),
            zombies = report.zombie_count(),
            degraded = report.degraded_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );
        Ok(report)
    }

    async fn evaluate(
        &self,
        job: &ScheduledJobRecord,
        threshold_days: i64,
        now: DateTime<Utc>,
    ) -> ZombieVerdict {
        match self.inventory.executions(job).await {
            Ok(records) => {
                let verdict = analyze(job, &records, threshold_days, now);
                tracing::debug!(
                    namespace = %job.namespace,
                    name = %job.name,
                    executions = records.len(),
                    days_since_success = verdict.days_since_success,
                    zombie = verdict.is_zombie,
                    confidence = verdict.confidence,
                    "classified"
                );
                verdict
            }
            Err(e) => {
                tracing::warn!(
                    namespace = %job.namespace,
                    name = %job.name,
                    error = %e,
                    "failed to get jobs; reporting without history"
                );
                degraded(job)
            }
        }
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
