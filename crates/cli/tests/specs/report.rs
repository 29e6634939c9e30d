// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table report specs
//!
//! Verify the default human-readable report against the standard fleet.

use crate::prelude::*;

#[test]
fn table_lists_zombies_with_confidence() {
    let snap = Snapshot::fleet();

    snap.zh()
        .passes()
        .stdout_has("🧟 ZOMBIE HUNTER REPORT")
        .stdout_has("Threshold: 30 days")
        .stdout_has("Scanned: 5 CronJobs in all namespaces")
        .stdout_has("ZOMBIE CANDIDATES (4 found)")
        .stdout_has("Total zombies found: 4")
        .stdout_has("High confidence (≥80%): 2")
        .stdout_has("💡 Tip")
        .stdout_lacks("fresh");
}

#[test]
fn table_rows_show_days_and_markers() {
    let snap = Snapshot::fleet();
    let out = snap.zh().passes().stdout();

    let row = |name: &str| {
        out.lines()
            .find(|l| l.contains(name))
            .unwrap_or_else(|| panic!("no row for {}:\n{}", name, out))
            .to_string()
    };

    assert!(row("stale").contains("85%"));
    assert!(row("broken").contains("NEVER"));
    assert!(row("broken").contains("2 total, 2 failed"));
    assert!(row("paused").contains("20%"));
    assert!(row("paused").ends_with("(susp.)"));
    assert!(row("ghost").contains("0 total, 0 failed"));
}

#[test]
fn healthy_namespace_reports_no_zombies() {
    let snap = Snapshot::new(vec![
        cron_job("ops", "fresh", "0 * * * *", false),
        succeeded("ops", "fresh", 1),
    ]);

    snap.zh()
        .passes()
        .stdout_has("✅ No zombies found! All CronJobs are healthy.")
        .stdout_lacks("ZOMBIE CANDIDATES");
}

#[test]
fn namespace_flag_limits_scope() {
    let snap = Snapshot::fleet();

    snap.zh()
        .args(&["--namespace", "ops"])
        .passes()
        .stdout_has("Scanned: 2 CronJobs in namespace ops")
        .stdout_has("ZOMBIE CANDIDATES (1 found)")
        .stdout_has("stale")
        .stdout_lacks("ghost");
}

#[test]
fn days_flag_raises_threshold() {
    let snap = Snapshot::fleet();

    snap.zh()
        .args(&["--days", "150"])
        .passes()
        .stdout_has("Threshold: 150 days")
        .stdout_has("ZOMBIE CANDIDATES (3 found)")
        .stdout_lacks("stale");
}

#[test]
fn label_join_matches_owner_join() {
    let snap = Snapshot::fleet();
    let by_owner = snap.zh().args(&["--format", "csv"]).passes().stdout();
    let by_label = snap.zh().args(&["--format", "csv", "--join", "label"]).passes().stdout();
    similar_asserts::assert_eq!(by_owner, by_label);
}
