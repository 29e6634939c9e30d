//! Stamps the short git hash into `BUILD_GIT_HASH` for `--version`.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok().map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-env-changed=BUILD_GIT_HASH");

    let hash = match std::env::var("BUILD_GIT_HASH") {
        Ok(hash) if !hash.is_empty() => hash,
        _ => git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into()),
    };
    println!("cargo:rustc-env=BUILD_GIT_HASH={hash}");

    if let Some(dir) = git(&["rev-parse", "--git-dir"]) {
        for watched in ["HEAD", "refs"] {
            println!("cargo:rerun-if-changed={dir}/{watched}");
        }
    }
}
