// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config layering specs
//!
//! Verify config file values apply and flags override them.

use crate::prelude::*;

#[test]
fn config_file_sets_defaults() {
    let snap = Snapshot::fleet();
    let config = snap.dir().join("zh.toml");
    std::fs::write(&config, "days = 150\nformat = \"csv\"\n").unwrap();

    let out = snap.zh().args(&["--config", &config.display().to_string()]).passes().stdout();

    assert!(out.starts_with("Name,Namespace"));
    assert!(!out.contains("stale"));
}

#[test]
fn flags_override_config_file() {
    let snap = Snapshot::fleet();
    let config = snap.dir().join("zh.toml");
    std::fs::write(&config, "days = 150\nformat = \"csv\"\n").unwrap();

    snap.zh()
        .args(&["--config", &config.display().to_string(), "--days", "30", "--format", "table"])
        .passes()
        .stdout_has("ZOMBIE CANDIDATES (4 found)");
}

#[test]
fn zh_config_env_is_honored() {
    let snap = Snapshot::fleet();
    let config = snap.dir().join("zh.toml");
    std::fs::write(&config, "namespace = \"ops\"\n").unwrap();

    snap.zh().env("ZH_CONFIG", &config).passes().stdout_has("namespace ops");
}

#[test]
fn missing_explicit_config_fails() {
    let snap = Snapshot::fleet();
    let missing = snap.dir().join("nope.toml");

    snap.zh()
        .args(&["--config", &missing.display().to_string()])
        .exits_with(1)
        .stderr_has("failed to read config");
}

#[test]
fn invalid_config_fails() {
    let snap = Snapshot::fleet();
    let config = snap.dir().join("zh.toml");
    std::fs::write(&config, "days = \"many\"\n").unwrap();

    snap.zh()
        .args(&["--config", &config.display().to_string()])
        .exits_with(1)
        .stderr_has("invalid config");
}
