// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Machine-readable output specs
//!
//! Verify CSV and JSON output carry exactly the zombies, in inventory order.

use crate::prelude::*;

#[test]
fn csv_output_in_inventory_order() {
    let snap = Snapshot::fleet();
    let out = snap.zh().args(&["--format", "csv"]).passes().stdout();

    similar_asserts::assert_eq!(
        out,
        "Name,Namespace,Schedule,DaysSinceSuccess,TotalJobs,FailedJobs,Confidence,Suspended\n\
         stale,ops,0 3 * * *,100,1,0,85,false\n\
         broken,batch,*/15 * * * *,999,2,2,95,false\n\
         paused,batch,0 0 1 * *,200,1,0,20,true\n\
         ghost,batch,\"0 12 * * 1,3,5\",999,0,0,50,false\n"
    );
}

#[test]
fn json_output_has_summary() {
    let snap = Snapshot::fleet();
    let doc = snap.zh().args(&["--format", "json"]).passes().json();

    assert_eq!(doc["threshold_days"], 30);
    assert_eq!(doc["total_zombies"], 4);
    assert_eq!(doc["high_confidence"], 2);
    assert!(doc["generated_at"].as_str().unwrap().ends_with('Z'));

    let names: Vec<&str> =
        doc["zombies"].as_array().unwrap().iter().map(|z| z["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["stale", "broken", "paused", "ghost"]);

    let broken = &doc["zombies"][1];
    assert_eq!(broken["confidence"], 95);
    assert_eq!(broken["reason"], "all_failed");
    assert_eq!(broken["last_success"], serde_json::Value::Null);
}

#[test]
fn json_output_is_plain_even_when_color_forced() {
    let snap = Snapshot::fleet();
    let run = snap.zh().env("NO_COLOR", "0").env("COLOR", "1").args(&["-o", "json"]).passes();
    assert!(!run.stdout().contains('\x1b'));
    run.json();
}

#[test]
fn unknown_format_is_a_usage_error() {
    let snap = Snapshot::fleet();
    snap.zh().args(&["--format", "yaml"]).exits_with(2).stderr_has("invalid value 'yaml'");
}
