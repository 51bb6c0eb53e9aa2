//! Cache isolation between queries.
//!
//! The warehouse engine isolates through SQL and lives in its adapter. The
//! embedded engine is restarted as a container on a remote host.

pub mod container;
pub mod remote;

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub use container::{ContainerManager, HealthProbe};
pub use embench_core::layout::{CacheMode, Warmth};
pub use remote::{CommandOutput, RemoteShell, SshShell};

/// Timeouts and delays of one container restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartPolicy {
    pub stop_timeout: Duration,
    /// Pause between a clean stop and the next start
    pub settle: Duration,
    pub start_timeout: Duration,
    pub health_attempts: u32,
    pub health_delay: Duration,
    pub health_timeout: Duration,
    pub cleanup_timeout: Duration,
}

impl Default for RestartPolicy {
    fn default() -> Self {
        Self {
            stop_timeout: Duration::from_secs(120),
            settle: Duration::from_secs(5),
            start_timeout: Duration::from_secs(120),
            health_attempts: 30,
            health_delay: Duration::from_secs(10),
            health_timeout: Duration::from_secs(5),
            cleanup_timeout: Duration::from_secs(180),
        }
    }
}

/// Brings the embedded engine back to a cold, ready state
#[async_trait]
pub trait EngineRestarter: Send + Sync {
    /// Restart the engine and wait until it reports ready.
    ///
    /// # Errors
    /// `Error::Restart` naming the stage that failed.
    async fn restart(&self) -> Result<()>;
}
