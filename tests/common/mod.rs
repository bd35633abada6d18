// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shared fixtures - real repositories built with the git CLI

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use std::path::Path;
use std::process::Command;

/// Run git in `dir` with a fixed identity and no user configuration
pub fn git(dir: &Path, args: &[&str]) {
    git_with_env(dir, args, &[]);
}

fn git_with_env(dir: &Path, args: &[&str], envs: &[(&str, String)]) {
    let output = Command::new("git")
        .current_dir(dir)
        .args(["-c", "commit.gpgsign=false", "-c", "core.hooksPath=/dev/null"])
        .args(args)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_AUTHOR_NAME", "John Doe")
        .env("GIT_AUTHOR_EMAIL", "johndoe@nowhere.com")
        .env("GIT_COMMITTER_NAME", "John Doe")
        .env("GIT_COMMITTER_EMAIL", "johndoe@nowhere.com")
        .envs(envs.iter().map(|(k, v)| (*k, v.as_str())))
        .output()
        .expect("Failed to execute git");

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn git_date(time: DateTime<Utc>) -> String {
    format!("@{} +0000", time.timestamp())
}

/// Initialise an empty repository at `path` whose HEAD names `branch`
pub fn init_repo(path: &Path, branch: &str) {
    std::fs::create_dir_all(path).unwrap();
    git(path, &["init", "-q"]);
    git(path, &["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")]);
}

/// Record an empty commit with separate author and committer times
pub fn commit_as(path: &Path, message: &str, authored: DateTime<Utc>, committed: DateTime<Utc>) {
    git_with_env(
        path,
        &["commit", "-q", "--allow-empty", "-m", message],
        &[
            ("GIT_AUTHOR_DATE", git_date(authored)),
            ("GIT_COMMITTER_DATE", git_date(committed)),
        ],
    );
}

/// Record an empty commit authored and committed at `time`
pub fn commit(path: &Path, message: &str, time: DateTime<Utc>) {
    commit_as(path, message, time, time);
}

/// Repository at `path` on `branch` with a single commit at `time`
pub fn repo_with_commit(path: &Path, branch: &str, time: DateTime<Utc>) {
    init_repo(path, branch);
    commit(path, "Initial commit", time);
}
