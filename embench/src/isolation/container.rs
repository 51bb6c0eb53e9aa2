//! Container lifecycle of the embedded engine
//!
//! Restart is a fixed sequence: stop, settle, start, then poll the health
//! endpoint until it answers 200 or the attempts run out. Any failing step
//! aborts the restart.

use super::{EngineRestarter, RemoteShell, RestartPolicy};
use crate::config::RemoteConfig;
use crate::error::{Error, RestartStage, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Readiness check against the engine's `/health` endpoint
#[derive(Debug, Clone)]
pub struct HealthProbe {
    url: String,
    client: reqwest::Client,
}

impl HealthProbe {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `true` only for a 200 response; connection failures count as not ready
    pub async fn is_ready(&self) -> bool {
        match self.client.get(&self.url).send().await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                tracing::debug!(url = %self.url, error = %e, "Health check failed");
                false
            }
        }
    }
}

/// Drives `docker-compose` on the remote host
pub struct ContainerManager {
    shell: Box<dyn RemoteShell>,
    compose_dir: String,
    service: String,
    health: HealthProbe,
    policy: RestartPolicy,
}

impl ContainerManager {
    pub fn new(
        shell: Box<dyn RemoteShell>,
        remote: &RemoteConfig,
        health: HealthProbe,
        policy: RestartPolicy,
    ) -> Self {
        Self {
            shell,
            compose_dir: remote.compose_dir.clone(),
            service: remote.service.clone(),
            health,
            policy,
        }
    }

    fn compose(&self, args: &str) -> String {
        format!("cd {} && docker-compose {}", self.compose_dir, args)
    }

    async fn compose_step(&self, stage: RestartStage, verb: &str, timeout: Duration) -> Result<()> {
        let command = self.compose(&format!("{} {}", verb, self.service));
        let output = self
            .shell
            .run(&command, timeout)
            .await
            .map_err(|e| Error::Restart {
                stage,
                message: e.to_string(),
            })?;

        if !output.success {
            return Err(Error::Restart {
                stage,
                message: output.stderr.trim().to_string(),
            });
        }
        Ok(())
    }

    pub async fn stop(&self) -> Result<()> {
        self.compose_step(RestartStage::Stop, "stop", self.policy.stop_timeout)
            .await
    }

    pub async fn start(&self) -> Result<()> {
        self.compose_step(RestartStage::Start, "start", self.policy.start_timeout)
            .await
    }

    /// Poll the health endpoint up to `health_attempts` times
    pub async fn wait_until_healthy(&self) -> Result<()> {
        let attempts = self.policy.health_attempts;
        for attempt in 1..=attempts {
            if self.health.is_ready().await {
                tracing::debug!(attempt, "Embedded engine is healthy");
                return Ok(());
            }
            if attempt < attempts {
                tokio::time::sleep(self.policy.health_delay).await;
            }
        }
        Err(Error::Restart {
            stage: RestartStage::Health,
            message: format!(
                "{} not ready after {} attempts",
                self.health.url(),
                attempts
            ),
        })
    }

    /// `docker-compose ps` output for the service
    pub async fn status(&self) -> Result<String> {
        let command = self.compose(&format!("ps {}", self.service));
        let output = self.shell.run(&command, self.policy.stop_timeout).await?;
        if !output.success {
            return Err(Error::Remote(output.stderr.trim().to_string()));
        }
        Ok(output.stdout)
    }

    /// Last `lines` log lines of the service
    pub async fn logs(&self, lines: u32) -> Result<String> {
        let command = self.compose(&format!("logs --tail={} {}", lines, self.service));
        let output = self.shell.run(&command, self.policy.stop_timeout).await?;
        if !output.success {
            return Err(Error::Remote(output.stderr.trim().to_string()));
        }
        Ok(output.stdout)
    }

    /// Tear the compose project down and prune unused images and volumes
    pub async fn cleanup(&self) -> Result<()> {
        let command = self.compose("down && docker system prune -f && docker volume prune -f");
        let output = self.shell.run(&command, self.policy.cleanup_timeout).await?;
        if !output.success {
            return Err(Error::Remote(output.stderr.trim().to_string()));
        }
        tracing::info!("Cleaned up embedded engine containers");
        Ok(())
    }
}

#[async_trait]
impl EngineRestarter for ContainerManager {
    async fn restart(&self) -> Result<()> {
        tracing::info!(service = %self.service, "Restarting embedded engine");
        self.stop().await?;
        tokio::time::sleep(self.policy.settle).await;
        self.start().await?;
        self.wait_until_healthy().await
    }
}
