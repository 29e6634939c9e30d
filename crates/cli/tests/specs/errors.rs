// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure specs
//!
//! Verify exit codes and messages when the inventory cannot be loaded.

use crate::prelude::*;

#[test]
fn missing_snapshot_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    Cli::bare(dir.path())
        .args(&["--from-file", &missing.display().to_string()])
        .exits_with(2)
        .stderr_has("Error: failed to read snapshot");
}

#[test]
fn malformed_snapshot_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    Cli::bare(dir.path())
        .args(&["--from-file", &path.display().to_string()])
        .exits_with(2)
        .stderr_has("invalid snapshot");
}

#[test]
fn help_lists_flags() {
    let dir = tempfile::tempdir().unwrap();
    let run = Cli::bare(dir.path()).args(&["--help"]).passes();
    for flag in ["--days", "--namespace", "--format", "--join", "--from-file", "--concurrency"] {
        assert!(run.stdout().contains(flag), "help missing {flag}");
    }
}

#[test]
fn version_includes_build_hash() {
    let dir = tempfile::tempdir().unwrap();
    let out = Cli::bare(dir.path()).args(&["--version"]).passes().stdout();
    assert!(out.starts_with(concat!("zombie-hunter ", env!("CARGO_PKG_VERSION"), "+")), "{out}");
}
