//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files. Tests that need a real git binary call
//! [`git_available`] first and return early when none is installed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Check whether a usable git binary is on PATH.
///
/// Real-git tests skip themselves (early return) when this is false, so
/// the suite stays green on hosts without git installed.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Run a git subcommand in `repo`, panicking on failure.
///
/// Test scaffolding only; production code goes through the capability.
#[allow(dead_code)]
pub fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed in {}: {}",
        args,
        repo.display(),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create a source repository at `root` with `n_commits` commits touching
/// `README.md`, and a committer identity local to the repository.
#[allow(dead_code)]
pub fn create_source_repo(root: &Path, n_commits: usize) -> PathBuf {
    fs::create_dir_all(root).expect("failed to create repo dir");
    git(root, &["init"]);
    git(root, &["config", "user.email", "tests@example.com"]);
    git(root, &["config", "user.name", "Test Author"]);

    for i in 0..n_commits {
        fs::write(root.join("README.md"), format!("Revision {}\n", i))
            .expect("failed to write README");
        git(root, &["add", "README.md"]);
        git(root, &["commit", "-m", &format!("Commit {}", i)]);
    }

    root.to_path_buf()
}
