//! Remote command execution over ssh.

use crate::config::RemoteConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

/// Captured result of a finished remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[async_trait]
pub trait RemoteShell: Send + Sync {
    /// Run `command` on the remote host, giving up after `timeout`
    ///
    /// A command that exits non-zero is not an error; check
    /// [`CommandOutput::success`].
    async fn run(&self, command: &str, timeout: Duration) -> Result<CommandOutput>;
}

/// Runs commands through the local `ssh` client
#[derive(Debug, Clone)]
pub struct SshShell {
    remote: RemoteConfig,
}

impl SshShell {
    pub fn new(remote: RemoteConfig) -> Self {
        Self { remote }
    }

    /// Arguments passed to `ssh`, command last
    pub fn ssh_args(&self, command: &str) -> Vec<String> {
        vec![
            "-i".to_string(),
            self.remote.key_path.display().to_string(),
            "-o".to_string(),
            "StrictHostKeyChecking=no".to_string(),
            "-o".to_string(),
            "ConnectTimeout=10".to_string(),
            format!("{}@{}", self.remote.user, self.remote.host),
            command.to_string(),
        ]
    }
}

#[async_trait]
impl RemoteShell for SshShell {
    async fn run(&self, command: &str, timeout: Duration) -> Result<CommandOutput> {
        tracing::debug!(host = %self.remote.host, command, "Running remote command");

        let child = Command::new("ssh")
            .args(self.ssh_args(command))
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(timeout, child)
            .await
            .map_err(|_| {
                Error::Remote(format!(
                    "'{}' on {} timed out after {}s",
                    command,
                    self.remote.host,
                    timeout.as_secs()
                ))
            })??;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
