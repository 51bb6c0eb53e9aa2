//! Engine credentials and addressing, read once from the environment.
//!
//! Only the sections for the selected engines are required; a missing or
//! empty variable is reported together with every other missing one.

use crate::engine::EngineKind;
use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Matches the socket timeout used against both engines
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(1200);

/// Warehouse name sent by the embedded engine's sessions
pub const EMBEDDED_WAREHOUSE: &str = "embucket";

fn default_remote_user() -> String {
    "ec2-user".to_string()
}

fn default_key_path() -> String {
    "~/.ssh/id_rsa".to_string()
}

fn default_compose_dir() -> String {
    "/home/ec2-user".to_string()
}

fn default_service() -> String {
    "embucket".to_string()
}

/// Everything needed to open a REST session
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    /// Scheme, host and port, without trailing slash
    pub base_url: String,
    pub user: String,
    pub password: String,
    pub account: String,
    pub database: String,
    pub schema: String,
    pub warehouse: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct WarehouseConfig {
    pub connection: ConnectionSettings,
}

impl WarehouseConfig {
    pub fn warehouse_name(&self) -> &str {
        &self.connection.warehouse
    }
}

/// Remote host running the embedded engine's compose project
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub host: String,
    pub user: String,
    pub key_path: PathBuf,
    pub compose_dir: String,
    pub service: String,
}

#[derive(Debug, Clone)]
pub struct EmbeddedConfig {
    pub connection: ConnectionSettings,
    pub instance: String,
    pub health_url: String,
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub warehouse: Option<WarehouseConfig>,
    pub embedded: Option<EmbeddedConfig>,
}

impl Config {
    /// Build from the process environment for the given engines.
    pub fn from_env(engines: &[EngineKind]) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), engines)
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F, engines: &[EngineKind]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut vars = Vars {
            lookup: &lookup,
            missing: Vec::new(),
        };

        let mut config = Config::default();
        for engine in engines {
            match engine {
                EngineKind::Warehouse => config.warehouse = Some(warehouse_config(&mut vars)),
                EngineKind::Embedded => config.embedded = embedded_config(&mut vars)?,
            }
        }

        if !vars.missing.is_empty() {
            return Err(Error::Config(format!(
                "missing required environment variables: {}",
                vars.missing.join(", ")
            )));
        }

        Ok(config)
    }

    pub fn warehouse(&self) -> Result<&WarehouseConfig> {
        self.warehouse
            .as_ref()
            .ok_or_else(|| Error::Config("warehouse engine is not configured".to_string()))
    }

    pub fn embedded(&self) -> Result<&EmbeddedConfig> {
        self.embedded
            .as_ref()
            .ok_or_else(|| Error::Config("embedded engine is not configured".to_string()))
    }
}

struct Vars<'a, F> {
    lookup: &'a F,
    missing: Vec<String>,
}

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&mut self, key: &str) -> String {
        match self.optional(key) {
            Some(v) => v,
            None => {
                self.missing.push(key.to_string());
                String::new()
            }
        }
    }

    fn or_default(&self, key: &str, default: fn() -> String) -> String {
        self.optional(key).unwrap_or_else(default)
    }
}

fn warehouse_config<F>(vars: &mut Vars<'_, F>) -> WarehouseConfig
where
    F: Fn(&str) -> Option<String>,
{
    let account = vars.required("SNOWFLAKE_ACCOUNT");
    let base_url = match vars.optional("SNOWFLAKE_HOST") {
        Some(host) if host.contains("://") => host.trim_end_matches('/').to_string(),
        Some(host) => format!("https://{}", host.trim_end_matches('/')),
        None => format!("https://{}.snowflakecomputing.com", account),
    };

    WarehouseConfig {
        connection: ConnectionSettings {
            base_url,
            user: vars.required("SNOWFLAKE_USER"),
            password: vars.required("SNOWFLAKE_PASSWORD"),
            account,
            database: vars.required("SNOWFLAKE_DATABASE"),
            schema: vars.required("SNOWFLAKE_SCHEMA"),
            warehouse: vars.required("SNOWFLAKE_WAREHOUSE"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        },
    }
}

fn embedded_config<F>(vars: &mut Vars<'_, F>) -> Result<Option<EmbeddedConfig>>
where
    F: Fn(&str) -> Option<String>,
{
    let host = vars.required("EMBUCKET_HOST");
    let port = vars.required("EMBUCKET_PORT");
    let protocol = vars.required("EMBUCKET_PROTOCOL");
    let user = vars.required("EMBUCKET_USER");
    let password = vars.required("EMBUCKET_PASSWORD");
    let account = vars.required("EMBUCKET_ACCOUNT");
    let database = vars.required("EMBUCKET_DATABASE");
    let schema = vars.required("EMBUCKET_SCHEMA");
    let instance = vars.required("EMBUCKET_INSTANCE");

    // Reported together with any other missing variable by the caller
    if port.is_empty() {
        return Ok(None);
    }
    let port: u16 = port
        .parse()
        .map_err(|e| Error::Config(format!("EMBUCKET_PORT '{}' is not a port: {}", port, e)))?;

    let base_url = format!("{}://{}:{}", protocol, host, port);
    let key_path = expand_home(&vars.or_default("SSH_KEY_PATH", default_key_path), vars);

    Ok(Some(EmbeddedConfig {
        health_url: format!("{}/health", base_url),
        connection: ConnectionSettings {
            base_url,
            user,
            password,
            account,
            database,
            schema,
            warehouse: EMBEDDED_WAREHOUSE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        },
        instance,
        remote: RemoteConfig {
            host,
            user: vars.or_default("EC2_USER", default_remote_user),
            key_path,
            compose_dir: vars.or_default("EMBUCKET_COMPOSE_DIR", default_compose_dir),
            service: vars.or_default("EMBUCKET_SERVICE", default_service),
        },
    }))
}

fn expand_home<F>(path: &str, vars: &Vars<'_, F>) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    match (path.strip_prefix("~/"), vars.optional("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn embedded_env() -> HashMap<String, String> {
        env(&[
            ("EMBUCKET_HOST", "10.0.0.5"),
            ("EMBUCKET_PORT", "3000"),
            ("EMBUCKET_PROTOCOL", "http"),
            ("EMBUCKET_USER", "embucket"),
            ("EMBUCKET_PASSWORD", "embucket"),
            ("EMBUCKET_ACCOUNT", "acc"),
            ("EMBUCKET_DATABASE", "embucket"),
            ("EMBUCKET_SCHEMA", "public"),
            ("EMBUCKET_INSTANCE", "c7i.4xlarge"),
            ("HOME", "/home/bench"),
        ])
    }

    #[test]
    fn test_embedded_defaults() {
        let vars = embedded_env();
        let config = Config::from_lookup(|k| vars.get(k).cloned(), &[EngineKind::Embedded]).unwrap();
        let embedded = config.embedded().unwrap();

        assert_eq!(embedded.connection.base_url, "http://10.0.0.5:3000");
        assert_eq!(embedded.health_url, "http://10.0.0.5:3000/health");
        assert_eq!(embedded.connection.warehouse, "embucket");
        assert_eq!(embedded.remote.user, "ec2-user");
        assert_eq!(embedded.remote.key_path, PathBuf::from("/home/bench/.ssh/id_rsa"));
        assert_eq!(embedded.remote.compose_dir, "/home/ec2-user");
        assert!(config.warehouse().is_err());
    }

    #[test]
    fn test_missing_variables_reported_together() {
        let vars = env(&[("SNOWFLAKE_USER", "u"), ("SNOWFLAKE_PASSWORD", " ")]);
        let err = Config::from_lookup(|k| vars.get(k).cloned(), &[EngineKind::Warehouse]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("SNOWFLAKE_PASSWORD"));
        assert!(message.contains("SNOWFLAKE_ACCOUNT"));
        assert!(message.contains("SNOWFLAKE_WAREHOUSE"));
        assert!(!message.contains("SNOWFLAKE_USER,"));
    }

    #[test]
    fn test_warehouse_host_defaults_to_account() {
        let vars = env(&[
            ("SNOWFLAKE_USER", "u"),
            ("SNOWFLAKE_PASSWORD", "p"),
            ("SNOWFLAKE_ACCOUNT", "xy12345.us-east-1"),
            ("SNOWFLAKE_DATABASE", "BENCH"),
            ("SNOWFLAKE_SCHEMA", "PUBLIC"),
            ("SNOWFLAKE_WAREHOUSE", "BENCH_WH"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).cloned(), &[EngineKind::Warehouse]).unwrap();
        let warehouse = config.warehouse().unwrap();
        assert_eq!(
            warehouse.connection.base_url,
            "https://xy12345.us-east-1.snowflakecomputing.com"
        );
        assert_eq!(warehouse.warehouse_name(), "BENCH_WH");
    }

    #[test]
    fn test_bad_port() {
        let mut vars = embedded_env();
        vars.insert("EMBUCKET_PORT".to_string(), "http".to_string());
        let err = Config::from_lookup(|k| vars.get(k).cloned(), &[EngineKind::Embedded]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
