//! # Version-Control Capability
//!
//! This module defines the boundary between the assembly engine and the
//! `git` binary. The [`GitCapability`] trait describes the handful of git
//! operations the engine needs; [`SystemGit`] is the default implementation
//! that spawns the system git command.
//!
//! ## Design
//!
//! The trait-based design separates orchestration logic from the concrete
//! process plumbing, which is particularly useful for testing: unit tests
//! inject mock capabilities to simulate clones and log output without
//! running git or touching the network.
//!
//! The capability is resolved once at process start (see
//! [`SystemGit::locate`]) and passed down explicitly, rather than being
//! looked up through module-level global state.
//!
//! Using the system git command automatically handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::process::{self, ExecOutcome, DEFAULT_TIMEOUT};

/// Trait for git operations - allows mocking in tests
///
/// All operations are synchronous and return git's combined stdout+stderr
/// text. Only `clone_repo` inspects the exit status; `add`, `commit` and
/// `log` surface git's own diagnostics as text so callers can decide what
/// to do with them (e.g. "nothing to commit" is not an error here).
pub trait GitCapability: Send + Sync {
    /// Initialize an empty repository in `path` (which must already exist).
    fn init(&self, path: &Path) -> Result<String>;

    /// Clone `source` into `dest`, limiting history depth when `depth` is
    /// given. Fails with [`Error::Clone`] if git exits non-zero.
    fn clone_repo(&self, source: &str, dest: &Path, depth: Option<u32>) -> Result<String>;

    /// Stage the given paths in the repository at `repo`.
    fn add(&self, repo: &Path, paths: &[PathBuf]) -> Result<String>;

    /// Create a commit with `message`; `stage_all` maps to `git commit -a`.
    fn commit(&self, repo: &Path, message: &str, stage_all: bool) -> Result<String>;

    /// Return the raw `git log` output for the repository at `repo`.
    fn log(&self, repo: &Path) -> Result<String>;
}

/// The default implementation of [`GitCapability`], which uses the system's
/// `git` command to perform real git operations.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
    timeout: Duration,
}

impl SystemGit {
    /// Create a capability that invokes `git` through `PATH` lookup at
    /// spawn time, with the default time budget.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a capability for a specific git binary.
    pub fn with_program(program: PathBuf) -> Self {
        Self {
            program,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-operation time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the git binary by scanning `PATH`.
    ///
    /// Returns `None` when no `git` executable is found; callers typically
    /// fall back to the bare command name and let spawn report the failure.
    pub fn locate() -> Option<PathBuf> {
        let path = env::var_os("PATH")?;
        env::split_paths(&path)
            .map(|dir| dir.join("git"))
            .find(|candidate| candidate.is_file())
    }

    /// The configured git binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, cwd: Option<&Path>, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(cwd) = cwd {
            cmd.current_dir(cwd);
        }
        log::debug!("running {}", render_command(&self.program, args));

        match process::run(&mut cmd, self.timeout)? {
            ExecOutcome::Completed { output, .. } => Ok(output),
            ExecOutcome::TimedOut { partial } => Err(Error::Timeout {
                command: render_command(&self.program, args),
                partial,
            }),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCapability for SystemGit {
    fn init(&self, path: &Path) -> Result<String> {
        self.run(Some(path), &["init"])
    }

    fn clone_repo(&self, source: &str, dest: &Path, depth: Option<u32>) -> Result<String> {
        let depth_arg = depth.map(|d| d.to_string());
        let mut args = vec!["clone"];
        if let Some(depth) = &depth_arg {
            args.push("--depth");
            args.push(depth);
        }
        args.push(source);
        let dest_str = dest.to_string_lossy();
        args.push(&dest_str);

        let mut cmd = Command::new(&self.program);
        cmd.args(&args);
        log::debug!("running {}", render_command(&self.program, &args));

        match process::run(&mut cmd, self.timeout)? {
            ExecOutcome::Completed { status, output } => {
                if status.success() {
                    Ok(output)
                } else {
                    Err(Error::Clone {
                        origin: source.to_string(),
                        message: output.trim_end().to_string(),
                        hint: auth_hint(&output),
                    })
                }
            }
            ExecOutcome::TimedOut { partial } => Err(Error::Timeout {
                command: render_command(&self.program, &args),
                partial,
            }),
        }
    }

    fn add(&self, repo: &Path, paths: &[PathBuf]) -> Result<String> {
        let mut args = vec!["add".to_string()];
        args.extend(paths.iter().map(|p| p.to_string_lossy().into_owned()));
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(Some(repo), &arg_refs)
    }

    fn commit(&self, repo: &Path, message: &str, stage_all: bool) -> Result<String> {
        if stage_all {
            self.run(Some(repo), &["commit", "-a", "-m", message])
        } else {
            self.run(Some(repo), &["commit", "-m", message])
        }
    }

    fn log(&self, repo: &Path) -> Result<String> {
        self.run(Some(repo), &["log"])
    }
}

/// Render a command line for diagnostics.
fn render_command(program: &Path, args: &[&str]) -> String {
    let mut rendered = program.to_string_lossy().into_owned();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Detect common authentication failures in clone output and provide a
/// resolution hint, since these are the clone errors users hit most.
fn auth_hint(output: &str) -> Option<String> {
    if output.contains("Authentication failed")
        || output.contains("Permission denied")
        || output.contains("Could not read from remote repository")
    {
        Some(
            "Authentication failed. Make sure you have access to the repository.\n\
             For private repos, ensure you have:\n\
             - SSH key added to ssh-agent\n\
             - Git credentials configured\n\
             - Personal access token set up"
                .to_string(),
        )
    } else {
        None
    }
}
