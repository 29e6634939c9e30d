// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::color::{codes, confidence_code, paint};
use std::io::{self, Write};
use zh_core::{ZombieVerdict, HIGH_CONFIDENCE};
use zh_engine::ScanReport;

const NAME_WIDTH: usize = 28;
const RULE_WIDTH: usize = 80;
const TABLE_WIDTH: usize = 100;

pub(super) fn write(report: &ScanReport, colorize: bool, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🧟 ZOMBIE HUNTER REPORT")?;
    writeln!(out, "Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(out, "Threshold: {} days", report.threshold_days)?;
    writeln!(out, "Scanned: {} CronJobs in {}", report.scanned(), report.scope)?;
    writeln!(out)?;

    let zombies: Vec<&ZombieVerdict> = report.zombies().collect();
    if zombies.is_empty() {
        writeln!(out, "✅ No zombies found! All CronJobs are healthy.")?;
        writeln!(out)?;
        return Ok(());
    }

    section(out, &format!("ZOMBIE CANDIDATES ({} found)", zombies.len()), colorize)?;
    writeln!(out)?;
    let header = row("🔍", "NAME", "NAMESPACE", "DAYS INACTIVE", "CONFIDENCE", "JOBS");
    writeln!(out, "{}", paint(codes::HEADER, header.trim_end(), colorize))?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    for z in &zombies {
        let confidence = paint(
            confidence_code(z.confidence),
            &format!("{:<12}", format!("{}%", z.confidence)),
            colorize,
        );
        let line = format!(
            "{:<4} {:<30} {:<15} {:<15} {} {}",
            marker(z.confidence),
            truncate(&z.name),
            z.namespace,
            days(z),
            confidence,
            jobs(z),
        );
        writeln!(out, "{}", line.trim_end())?;
    }

    writeln!(out)?;
    section(out, "SUMMARY", colorize)?;
    writeln!(out)?;
    writeln!(out, "Total zombies found: {}", zombies.len())?;
    let high = report.high_confidence_count();
    writeln!(out, "High confidence (≥{}%): {}", HIGH_CONFIDENCE, high)?;
    let degraded = report.degraded_count();
    if degraded > 0 {
        let note = format!("History unavailable: {} (see warnings on stderr)", degraded);
        writeln!(out, "{}", paint(codes::MUTED, &note, colorize))?;
    }
    if high > 0 {
        writeln!(out)?;
        writeln!(out, "💡 Tip: Start by reviewing high-confidence zombies")?;
    }

    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "1. Review each zombie with your team")?;
    writeln!(out, "2. Delete safely: kubectl delete cronjob <name> -n <namespace>")?;
    writeln!(out, "3. Try different thresholds: --days 60 or --days 90")?;
    writeln!(out)?;
    Ok(())
}

fn section(out: &mut dyn Write, title: &str, colorize: bool) -> io::Result<()> {
    let rule = "━".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", paint(codes::HEADER, title, colorize))?;
    writeln!(out, "{}", rule)
}

fn row(marker: &str, name: &str, ns: &str, days: &str, confidence: &str, jobs: &str) -> String {
    format!("{:<4} {:<30} {:<15} {:<15} {:<12} {}", marker, name, ns, days, confidence, jobs)
}

/// Glyph for a confidence band.
fn marker(confidence: u8) -> &'static str {
    match confidence {
        90.. => "💀",
        70..=89 => "⚠️",
        50..=69 => "🤔",
        _ => "ℹ️",
    }
}

fn truncate(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let head: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

fn days(z: &ZombieVerdict) -> String {
    if z.never_succeeded() {
        "NEVER".to_string()
    } else {
        z.days_since_success.to_string()
    }
}

fn jobs(z: &ZombieVerdict) -> String {
    let mut s = format!("{} total, {} failed", z.total_jobs, z.failed_jobs);
    if z.is_suspended {
        s.push_str(" (susp.)");
    }
    if z.history_unavailable {
        s.push_str(" (no history)");
    }
    s
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
