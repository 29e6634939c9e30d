// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: snapshot builders and a thin assertion layer over
//! `assert_cmd`.

use chrono::{Duration, SecondsFormat, Utc};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// RFC 3339 timestamp `days` ago.
pub fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn cron_job(namespace: &str, name: &str, schedule: &str, suspend: bool) -> Value {
    json!({
        "apiVersion": "batch/v1",
        "kind": "CronJob",
        "metadata": { "name": name, "namespace": namespace },
        "spec": { "schedule": schedule, "suspend": suspend, "jobTemplate": {} }
    })
}

/// Job owned by `owner` (owner reference and `cronjob` label) that
/// succeeded `days` ago.
pub fn succeeded(namespace: &str, owner: &str, days: i64) -> Value {
    let mut job = owned_job(namespace, owner, &format!("{owner}-ok-{days}"));
    job["status"] = json!({ "succeeded": 1, "completionTime": days_ago(days) });
    job
}

/// Job owned by `owner` that failed `days` ago.
pub fn failed(namespace: &str, owner: &str, days: i64) -> Value {
    let mut job = owned_job(namespace, owner, &format!("{owner}-fail-{days}"));
    job["status"] = json!({
        "failed": 1,
        "conditions": [
            { "type": "Failed", "status": "True", "lastTransitionTime": days_ago(days) }
        ]
    });
    job
}

fn owned_job(namespace: &str, owner: &str, name: &str) -> Value {
    json!({
        "apiVersion": "batch/v1",
        "kind": "Job",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "labels": { "cronjob": owner },
            "ownerReferences": [
                {
                    "apiVersion": "batch/v1",
                    "kind": "CronJob",
                    "name": owner,
                    "uid": format!("uid-{owner}"),
                }
            ]
        }
    })
}

/// A temp directory holding one snapshot file and an isolated config home.
pub struct Snapshot {
    dir: TempDir,
    path: PathBuf,
}

impl Snapshot {
    pub fn new(items: Vec<Value>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let doc = json!({ "apiVersion": "v1", "kind": "List", "items": items });
        std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
        Self { dir, path }
    }

    /// Standard fleet: one of each verdict class.
    ///
    /// - `fresh` (ops) succeeded yesterday: healthy
    /// - `stale` (ops) succeeded 100 days ago: 85
    /// - `broken` (batch) two failures, latest 40 days ago: 95
    /// - `paused` (batch) suspended, last success 200 days ago: 20
    /// - `ghost` (batch) no Jobs at all: 50
    pub fn fleet() -> Self {
        Self::new(vec![
            cron_job("ops", "fresh", "0 * * * *", false),
            cron_job("ops", "stale", "0 3 * * *", false),
            cron_job("batch", "broken", "*/15 * * * *", false),
            cron_job("batch", "paused", "0 0 1 * *", true),
            cron_job("batch", "ghost", "0 12 * * 1,3,5", false),
            succeeded("ops", "fresh", 1),
            succeeded("ops", "stale", 100),
            failed("batch", "broken", 45),
            failed("batch", "broken", 40),
            succeeded("batch", "paused", 200),
        ])
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// `zombie-hunter --from-file <snapshot>` with a scrubbed environment.
    pub fn zh(&self) -> Cli {
        let mut cmd = Cli::bare(self.dir());
        cmd.args(&["--from-file", &self.path.display().to_string()]);
        cmd
    }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    /// Binary with no snapshot argument; config lookups stay inside `home`.
    pub fn bare(home: &Path) -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("zombie-hunter").unwrap();
        cmd.env_remove("ZH_CONFIG")
            .env_remove("ZH_CONCURRENCY")
            .env_remove("ZH_LOG")
            .env_remove("RUST_LOG")
            .env_remove("KUBECONFIG")
            .env_remove("KUBERNETES_SERVICE_HOST")
            .env_remove("COLOR")
            .env("NO_COLOR", "1")
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"));
        Self { cmd }
    }

    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.cmd.args(args);
        self
    }

    pub fn env(&mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> &mut Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit code 0.
    pub fn passes(&mut self) -> Run {
        self.exits_with(0)
    }

    pub fn exits_with(&mut self, code: i32) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct Run {
    output: Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let out = self.stdout();
        assert!(out.contains(needle), "stdout missing {:?}:\n{}", needle, out);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let out = self.stdout();
        assert!(!out.contains(needle), "stdout unexpectedly has {:?}:\n{}", needle, out);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let err = self.stderr();
        assert!(err.contains(needle), "stderr missing {:?}:\n{}", needle, err);
        self
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }
}
