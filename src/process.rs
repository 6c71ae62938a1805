//! Synchronous child-process execution with a fixed time budget.
//!
//! Every git invocation goes through [`run`], which spawns one child
//! process, blocks until it exits or the budget elapses, and returns an
//! explicit [`ExecOutcome`] instead of signaling timeouts through errors.
//! On timeout the child is killed and whatever output it produced before
//! termination is still collected and returned.

use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Time budget applied to every git invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Interval at which a running child is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// The result of running a child process to completion or termination.
#[derive(Debug)]
pub enum ExecOutcome {
    /// The process exited on its own within the time budget.
    Completed {
        status: ExitStatus,
        /// Combined stdout followed by stderr.
        output: String,
    },
    /// The process exceeded the budget and was forcibly terminated.
    TimedOut {
        /// Output accumulated before the process was killed.
        partial: String,
    },
}

impl ExecOutcome {
    /// The collected output, whether the process completed or was killed.
    pub fn output(&self) -> &str {
        match self {
            ExecOutcome::Completed { output, .. } => output,
            ExecOutcome::TimedOut { partial } => partial,
        }
    }
}

/// Run `cmd` to completion, enforcing `timeout`.
///
/// Stdout and stderr are captured on background reader threads so a chatty
/// child cannot deadlock on a full pipe while we wait for it. The returned
/// output is stdout followed by stderr, lossily decoded as UTF-8.
pub fn run(cmd: &mut Command, timeout: Duration) -> std::io::Result<ExecOutcome> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let out_reader = thread::spawn(move || drain(stdout));
    let err_reader = thread::spawn(move || drain(stderr));

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            let output = join_output(out_reader, err_reader);
            return Ok(ExecOutcome::Completed { status, output });
        }
        if Instant::now() >= deadline {
            log::warn!("process exceeded {:?} budget, killing", timeout);
            // Kill can only fail if the child already exited; either way the
            // following wait reaps it and closes the pipes.
            let _ = child.kill();
            let _ = child.wait();
            let partial = join_output(out_reader, err_reader);
            return Ok(ExecOutcome::TimedOut { partial });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read>(reader: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut reader) = reader {
        let _ = reader.read_to_end(&mut buf);
    }
    buf
}

fn join_output(
    out_reader: thread::JoinHandle<Vec<u8>>,
    err_reader: thread::JoinHandle<Vec<u8>>,
) -> String {
    let out = out_reader.join().unwrap_or_default();
    let err = err_reader.join().unwrap_or_default();
    let mut combined = String::from_utf8_lossy(&out).into_owned();
    combined.push_str(&String::from_utf8_lossy(&err));
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", script]);
        cmd
    }

    #[test]
    #[cfg(unix)]
    fn test_run_completes_and_captures_stdout() {
        let outcome = run(&mut sh("echo hello"), DEFAULT_TIMEOUT).unwrap();
        match outcome {
            ExecOutcome::Completed { status, output } => {
                assert!(status.success());
                assert_eq!(output.trim(), "hello");
            }
            ExecOutcome::TimedOut { .. } => panic!("echo should not time out"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_run_combines_stdout_and_stderr() {
        let outcome = run(&mut sh("echo out; echo err >&2"), DEFAULT_TIMEOUT).unwrap();
        let output = outcome.output();
        assert!(output.contains("out"));
        assert!(output.contains("err"));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_reports_nonzero_exit() {
        let outcome = run(&mut sh("exit 3"), DEFAULT_TIMEOUT).unwrap();
        match outcome {
            ExecOutcome::Completed { status, .. } => assert!(!status.success()),
            ExecOutcome::TimedOut { .. } => panic!("exit should not time out"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_run_kills_on_timeout_and_keeps_partial_output() {
        let started = Instant::now();
        // exec so the kill reaches the sleep itself, not a wrapping shell
        let outcome = run(
            &mut sh("echo partial; exec sleep 30"),
            Duration::from_millis(300),
        )
        .unwrap();
        assert!(started.elapsed() < Duration::from_secs(10));
        match outcome {
            ExecOutcome::TimedOut { partial } => assert!(partial.contains("partial")),
            ExecOutcome::Completed { .. } => panic!("sleep 30 should have timed out"),
        }
    }

    #[test]
    fn test_run_spawn_failure_is_io_error() {
        let mut cmd = Command::new("definitely-not-a-real-binary-misc");
        assert!(run(&mut cmd, DEFAULT_TIMEOUT).is_err());
    }
}
