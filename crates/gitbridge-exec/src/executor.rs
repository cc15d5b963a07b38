//! Blocking-free execution of external commands.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::watch;
use tracing::{debug, trace, warn};

use gitbridge_models::{CommandSpec, ExecutionOutcome};

use crate::error::{ExecError, Result};

/// Default execution budget for one command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs command specs as child processes.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    /// Budget after which a running process is killed.
    timeout: Duration,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl ProcessExecutor {
    /// Creates an executor with the given timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check if a program can be found in PATH.
    pub fn is_available(program: &str) -> bool {
        which::which(program).is_ok()
    }

    /// Runs a command to completion without external cancellation.
    pub async fn run(&self, spec: &CommandSpec) -> Result<ExecutionOutcome> {
        let (_cancel_tx, cancel_rx) = watch::channel(false);
        self.run_cancellable(spec, cancel_rx).await
    }

    /// Runs a command, killing it if the watch channel flips to true.
    ///
    /// The process is spawned directly with its argument vector; no shell is
    /// ever involved. Stdout and stderr are accumulated line by line while
    /// waiting for termination.
    ///
    /// # Errors
    ///
    /// - [`ExecError::Launch`] if the process could not start
    /// - [`ExecError::Timeout`] if it outlived the execution budget
    /// - [`ExecError::Cancelled`] if the caller cancelled the run
    ///
    /// A non-zero exit is not an error; it comes back as a normal outcome.
    pub async fn run_cancellable(
        &self,
        spec: &CommandSpec,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<ExecutionOutcome> {
        debug!(
            command = %spec,
            directory = %spec.working_directory.display(),
            "launching process"
        );

        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(ExecError::Launch)?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        enum Waited {
            Finished(std::io::Result<(i32, String, String)>),
            TimedOut,
            Cancelled,
        }

        // The gather future holds the only mutable borrow of the child; it
        // is dropped at the end of this block so the child can be killed in
        // the timeout and cancel arms below.
        let waited = {
            let gather = async {
                let (out, err, status) =
                    tokio::join!(read_lines(stdout), read_lines(stderr), child.wait());
                let status = status?;
                Ok((status.code().unwrap_or(-1), out?, err?))
            };
            tokio::pin!(gather);

            let deadline = tokio::time::sleep(self.timeout);
            tokio::pin!(deadline);

            tokio::select! {
                res = &mut gather => Waited::Finished(res),
                _ = &mut deadline => Waited::TimedOut,
                _ = cancelled(&mut cancel) => Waited::Cancelled,
            }
        };

        match waited {
            Waited::Finished(res) => {
                let (exit_code, stdout, stderr) = res?;
                trace!(
                    exit_code,
                    stdout_len = stdout.len(),
                    stderr_len = stderr.len(),
                    "process completed"
                );
                Ok(ExecutionOutcome {
                    exit_code,
                    stdout,
                    stderr,
                })
            }
            Waited::TimedOut => {
                warn!(command = %spec, timeout = ?self.timeout, "process timed out, killing");
                let _ = child.start_kill();
                let _ = child.wait().await;
                Err(ExecError::Timeout(self.timeout))
            }
            Waited::Cancelled => {
                debug!(command = %spec, "run cancelled, killing process");
                let _ = child.start_kill();
                let _ = child.wait().await;
                Err(ExecError::Cancelled)
            }
        }
    }
}

/// Accumulates a pipe into one buffer, line by line.
async fn read_lines<R>(stream: Option<R>) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = String::new();
    if let Some(stream) = stream {
        let mut lines = BufReader::new(stream).lines();
        while let Some(line) = lines.next_line().await? {
            buffer.push_str(&line);
            buffer.push('\n');
        }
    }
    Ok(buffer)
}

/// Resolves when the watch value becomes true. Pends forever once the
/// sender is gone, since cancellation can no longer arrive.
async fn cancelled(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow() {
            return;
        }
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::temp_dir()
    }

    fn spec(program: &str, args: &[&str]) -> CommandSpec {
        CommandSpec::new(
            program,
            args.iter().map(|a| a.to_string()).collect(),
            cwd(),
        )
    }

    #[test]
    fn test_is_available() {
        assert!(ProcessExecutor::is_available("echo"));
        assert!(!ProcessExecutor::is_available("definitely-missing-binary-12345"));
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let executor = ProcessExecutor::default();
        let outcome = executor.run(&spec("echo", &["hello"])).await.unwrap();

        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.stdout, "hello\n");
        assert!(outcome.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_argument_with_spaces_stays_intact() {
        let executor = ProcessExecutor::default();
        let outcome = executor
            .run(&spec("echo", &["two words"]))
            .await
            .unwrap();

        assert_eq!(outcome.stdout, "two words\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_a_normal_outcome() {
        if !ProcessExecutor::is_available("false") {
            return;
        }

        let executor = ProcessExecutor::default();
        let outcome = executor.run(&spec("false", &[])).await.unwrap();
        assert_ne!(outcome.exit_code, 0);
    }

    #[tokio::test]
    async fn test_stderr_captured_on_failure() {
        if !ProcessExecutor::is_available("ls") {
            return;
        }

        let executor = ProcessExecutor::default();
        let outcome = executor
            .run(&spec("ls", &["/definitely-missing-path-12345"]))
            .await
            .unwrap();

        assert_ne!(outcome.exit_code, 0);
        assert!(!outcome.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_missing_binary_is_launch_error() {
        let executor = ProcessExecutor::default();
        let err = executor
            .run(&spec("definitely-missing-binary-12345", &[]))
            .await
            .unwrap_err();

        assert!(matches!(err, ExecError::Launch(_)));
    }

    #[tokio::test]
    async fn test_missing_working_directory_is_launch_error() {
        let scratch = tempfile::tempdir().unwrap();
        let gone = scratch.path().join("never-created");

        let executor = ProcessExecutor::default();
        let command = CommandSpec::new("echo", vec!["hi".into()], gone);
        let err = executor.run(&command).await.unwrap_err();

        assert!(matches!(err, ExecError::Launch(_)));
    }

    #[tokio::test]
    async fn test_timeout_kills_slow_process() {
        if !ProcessExecutor::is_available("sleep") {
            return;
        }

        let executor = ProcessExecutor::new(Duration::from_millis(100));
        let started = std::time::Instant::now();
        let err = executor.run(&spec("sleep", &["5"])).await.unwrap_err();

        assert!(matches!(err, ExecError::Timeout(_)));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_cancel_kills_running_process() {
        if !ProcessExecutor::is_available("sleep") {
            return;
        }

        let executor = ProcessExecutor::default();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let command = spec("sleep", &["5"]);

        let task = tokio::spawn(async move {
            executor.run_cancellable(&command, cancel_rx).await
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel_tx.send(true).unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, ExecError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_sender_dropped_does_not_abort_run() {
        let executor = ProcessExecutor::default();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        drop(cancel_tx);

        let outcome = executor
            .run_cancellable(&spec("echo", &["still runs"]), cancel_rx)
            .await
            .unwrap();
        assert_eq!(outcome.stdout, "still runs\n");
    }
}
