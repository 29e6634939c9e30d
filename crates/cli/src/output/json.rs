// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use zh_core::ZombieVerdict;
use zh_engine::ScanReport;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    threshold_days: i64,
    total_zombies: usize,
    high_confidence: usize,
    zombies: Vec<&'a ZombieVerdict>,
}

pub(super) fn write(report: &ScanReport, out: &mut dyn Write) -> anyhow::Result<()> {
    let doc = JsonReport {
        generated_at: report.generated_at,
        threshold_days: report.threshold_days,
        total_zombies: report.zombie_count(),
        high_confidence: report.high_confidence_count(),
        zombies: report.zombies().collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
