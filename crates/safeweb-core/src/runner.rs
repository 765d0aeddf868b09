// SPDX-License-Identifier: Apache-2.0

//! External process execution.
//!
//! Commands are always spawned from a program name and an argument vector.
//! Nothing here goes through a shell.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::error::SafewebError;

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

/// Runs external programs with a time budget.
///
/// Implementations must not invoke a shell.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` and waits at most `timeout` for it to exit.
    ///
    /// # Errors
    ///
    /// Returns `SafewebError::CommandTimeout` when the budget runs out and
    /// `SafewebError::CommandSpawn` when the process cannot be started.
    /// A nonzero exit is not an error at this level.
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, SafewebError>;
}

/// [`CommandRunner`] backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

#[async_trait]
impl CommandRunner for TokioRunner {
    #[instrument(skip(self, args), fields(argc = args.len()))]
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, SafewebError> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        // Dropping the pending future on timeout kills the child.
        let output = tokio::time::timeout(timeout, child)
            .await
            .map_err(|_| SafewebError::CommandTimeout {
                seconds: timeout.as_secs(),
            })?
            .map_err(SafewebError::CommandSpawn)?;

        debug!(status = %output.status, "command exited");

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn captures_stdout_on_success() {
        let output = TokioRunner
            .run("echo", &args(&["hello"]), Duration::from_secs(5))
            .await
            .unwrap();

        assert!(output.success);
        assert_eq!(output.code, Some(0));
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn arguments_are_not_shell_interpreted() {
        let output = TokioRunner
            .run("echo", &args(&["a; echo b"]), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(output.stdout.trim(), "a; echo b");
    }

    #[tokio::test]
    async fn reports_nonzero_exit() {
        let output = TokioRunner
            .run("sh", &args(&["-c", "echo oops >&2; exit 3"]), Duration::from_secs(5))
            .await
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[tokio::test]
    async fn times_out_long_running_process() {
        let result = TokioRunner
            .run("sleep", &args(&["10"]), Duration::from_millis(100))
            .await;

        assert!(matches!(result, Err(SafewebError::CommandTimeout { .. })));
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let result = TokioRunner
            .run("safeweb-no-such-program", &[], Duration::from_secs(1))
            .await;

        assert!(matches!(result, Err(SafewebError::CommandSpawn(_))));
    }
}
