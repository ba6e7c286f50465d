//! Shell tool: runs a command string through the platform shell.
//!
//! The full shell grammar is available to the caller. cc is a local
//! developer tool and trusts its operator; no filtering is applied.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::CcError;

/// Text captured from a successful command.
#[derive(Debug, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

/// Executes `command` and waits for it to exit.
///
/// With `timeout_secs` set, the child is killed once the limit passes.
///
/// # Errors
///
/// [`CcError::CommandLaunch`] if the shell cannot be started,
/// [`CcError::CommandFailed`] on a non-zero exit (carrying whatever was
/// captured), [`CcError::CommandTimeout`] when the limit is hit.
pub async fn run_command(
    command: &str,
    timeout_secs: Option<u64>,
) -> Result<CommandOutput, CcError> {
    let mut cmd = shell_command(command);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(CcError::CommandLaunch)?;
    tracing::debug!(pid = child.id(), "spawned shell");

    let output = match timeout_secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), child.wait_with_output())
            .await
            .map_err(|_| CcError::CommandTimeout { secs })?,
        None => child.wait_with_output().await,
    }
    .map_err(CcError::CommandLaunch)?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    // Killed by a signal: no exit code.
    let code = output.status.code().unwrap_or(-1);
    tracing::debug!(code, "shell exited");

    if code != 0 {
        return Err(CcError::CommandFailed {
            code,
            stdout,
            stderr,
        });
    }
    Ok(CommandOutput { stdout, stderr })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_hello() {
        let output = run_command("echo hello", None).await.unwrap();
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_stderr_is_captured_on_success() {
        let output = run_command("echo warn >&2", None).await.unwrap();
        assert!(output.stdout.is_empty());
        assert_eq!(output.stderr.trim(), "warn");
    }

    #[tokio::test]
    async fn test_nonzero_exit() {
        let err = run_command("echo partial; echo bad >&2; exit 3", None)
            .await
            .unwrap_err();
        match err {
            CcError::CommandFailed {
                code,
                stdout,
                stderr,
            } => {
                assert_eq!(code, 3);
                assert_eq!(stdout.trim(), "partial");
                assert_eq!(stderr.trim(), "bad");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_shell_grammar_is_available() {
        let output = run_command("printf 'b\\na\\n' | sort | head -n 1", None)
            .await
            .unwrap();
        assert_eq!(output.stdout.trim(), "a");
    }

    #[tokio::test]
    async fn test_timeout_kills_command() {
        let err = run_command("sleep 5", Some(1)).await.unwrap_err();
        assert!(matches!(err, CcError::CommandTimeout { secs: 1 }));
    }
}
