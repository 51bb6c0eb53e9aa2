//! Snowflake v1 REST session client
//!
//! Both engines speak this protocol, so one client serves the warehouse and
//! the embedded engine alike. Only synchronous execution with JSON result
//! sets is supported.

use crate::config::ConnectionSettings;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

const CLIENT_APP_ID: &str = "embench";

/// Codes the engine sends while a statement is still running
const QUERY_IN_PROGRESS: [&str; 2] = ["333333", "333334"];

const RESULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Result of one statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResponse {
    /// Engine-assigned query id
    pub query_id: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryResponse {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(name))
    }

    /// First column of the first row
    pub fn scalar(&self) -> Option<&str> {
        self.rows.first()?.first()?.as_deref()
    }
}

/// An open engine session
///
/// Statements run one at a time, in order.
#[async_trait]
pub trait SqlSession: Send {
    /// Execute a statement and wait for its full result
    ///
    /// # Errors
    /// `Error::Query` when the engine rejects the statement; transport errors
    /// otherwise.
    async fn execute(&mut self, sql: &str) -> Result<QueryResponse>;

    /// End the session; further calls fail
    async fn close(&mut self) -> Result<()>;
}

/// Opens sessions against one engine
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn SqlSession>>;
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    data: LoginRequestData<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct LoginRequestData<'a> {
    client_app_id: &'a str,
    client_app_version: &'a str,
    account_name: &'a str,
    login_name: &'a str,
    password: &'a str,
    session_parameters: HashMap<&'a str, Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    sql_text: &'a str,
    async_exec: bool,
    sequence_id: u64,
}

/// Common response wrapper: `{"data": ..., "success": ..., "message": ..., "code": ...}`
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    success: bool,
    message: Option<String>,
    code: Option<Value>,
}

impl<T> Envelope<T> {
    fn in_progress(&self) -> bool {
        self.success
            && self
                .code
                .as_ref()
                .and_then(value_to_string)
                .is_some_and(|code| QUERY_IN_PROGRESS.contains(&code.as_str()))
    }

    fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(Error::Query {
                code: self.code.as_ref().and_then(value_to_string),
                message: self
                    .message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            });
        }
        self.data
            .ok_or_else(|| Error::Protocol("response has no data".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponseData {
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RowType {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResponseData {
    query_id: Option<String>,
    #[serde(default)]
    rowtype: Vec<RowType>,
    rowset: Option<Vec<Vec<Value>>>,
    rowset_base64: Option<String>,
    #[serde(default)]
    chunks: Vec<Value>,
    get_result_url: Option<String>,
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

async fn read_envelope<T>(response: reqwest::Response, what: &str) -> Result<Envelope<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Protocol(format!(
            "{} returned status {}: {}",
            what,
            status,
            response.text().await.unwrap_or_default()
        )));
    }
    Ok(response.json().await?)
}

/// Logs in and hands out [`RestSession`]s
///
/// # Example
/// ```no_run
/// # use embench::client::{Connector, RestConnector, SqlSession};
/// # async fn example(settings: embench::config::ConnectionSettings) -> embench::Result<()> {
/// let connector = RestConnector::new(settings)?;
/// let mut session = connector.connect().await?;
/// let response = session.execute("SELECT 1").await?;
/// assert_eq!(response.scalar(), Some("1"));
/// session.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RestConnector {
    settings: ConnectionSettings,
    client: reqwest::Client,
}

impl RestConnector {
    pub fn new(settings: ConnectionSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self { settings, client })
    }

    /// Authenticate and open a session
    ///
    /// Makes a POST request to `/session/v1/login-request`.
    ///
    /// # Errors
    /// Returns error if:
    /// - HTTP request fails
    /// - Credentials are rejected (`success: false`)
    /// - Response carries no token
    pub async fn login(&self) -> Result<RestSession> {
        let s = &self.settings;
        let request_id = Uuid::new_v4().to_string();
        let url = Url::parse_with_params(
            &format!("{}/session/v1/login-request", s.base_url),
            &[
                ("databaseName", s.database.as_str()),
                ("schemaName", s.schema.as_str()),
                ("warehouse", s.warehouse.as_str()),
                ("request_id", request_id.as_str()),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", s.base_url, e)))?;

        let mut session_parameters = HashMap::new();
        session_parameters.insert("QUERY_RESULT_FORMAT", Value::from("JSON"));

        let body = LoginRequest {
            data: LoginRequestData {
                client_app_id: CLIENT_APP_ID,
                client_app_version: env!("CARGO_PKG_VERSION"),
                account_name: &s.account,
                login_name: &s.user,
                password: &s.password,
                session_parameters,
            },
        };

        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let data: LoginResponseData = read_envelope(response, "login").await?.into_data()?;
        let token = data
            .token
            .ok_or_else(|| Error::Protocol("login response has no token".to_string()))?;

        tracing::debug!(base_url = %s.base_url, user = %s.user, "Opened session");

        Ok(RestSession {
            client: self.client.clone(),
            base_url: s.base_url.clone(),
            token,
            sequence_id: 0,
            closed: false,
        })
    }
}

#[async_trait]
impl Connector for RestConnector {
    async fn connect(&self) -> Result<Box<dyn SqlSession>> {
        Ok(Box::new(self.login().await?))
    }
}

/// Authenticated session holding the login token
#[derive(Debug)]
pub struct RestSession {
    client: reqwest::Client,
    base_url: String,
    token: String,
    sequence_id: u64,
    closed: bool,
}

impl RestSession {
    fn authorization(&self) -> String {
        format!("Snowflake Token=\"{}\"", self.token)
    }

    /// Poll the result URL until the statement leaves the running state
    async fn wait_for_result(
        &self,
        mut envelope: Envelope<QueryResponseData>,
    ) -> Result<Envelope<QueryResponseData>> {
        while envelope.in_progress() {
            let result_url = envelope
                .data
                .as_ref()
                .and_then(|d| d.get_result_url.clone())
                .ok_or_else(|| {
                    Error::Protocol("running query response has no result URL".to_string())
                })?;
            tracing::debug!(url = %result_url, "Query still running");
            tokio::time::sleep(RESULT_POLL_INTERVAL).await;

            let response = self
                .client
                .get(format!("{}{}", self.base_url, result_url))
                .header(AUTHORIZATION, self.authorization())
                .header(ACCEPT, "application/json")
                .send()
                .await?;
            envelope = read_envelope(response, "query result").await?;
        }
        Ok(envelope)
    }
}

#[async_trait]
impl SqlSession for RestSession {
    async fn execute(&mut self, sql: &str) -> Result<QueryResponse> {
        if self.closed {
            return Err(Error::Protocol("session is closed".to_string()));
        }

        self.sequence_id += 1;
        let request_id = Uuid::new_v4().to_string();
        let url = Url::parse_with_params(
            &format!("{}/queries/v1/query-request", self.base_url),
            &[("requestId", request_id.as_str())],
        )
        .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", self.base_url, e)))?;

        let body = QueryRequest {
            sql_text: sql,
            async_exec: false,
            sequence_id: self.sequence_id,
        };

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.authorization())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let envelope = read_envelope(response, "query").await?;
        let data = self.wait_for_result(envelope).await?.into_data()?;

        if !data.chunks.is_empty() {
            return Err(Error::Protocol(format!(
                "result arrived in {} chunks; only inline result sets are supported",
                data.chunks.len()
            )));
        }

        let rows = match (data.rowset, data.rowset_base64) {
            (Some(rowset), _) => rowset
                .iter()
                .map(|row| row.iter().map(value_to_string).collect())
                .collect(),
            (None, Some(b64)) if !b64.is_empty() => {
                return Err(Error::Protocol(
                    "engine returned an Arrow result set; only JSON is supported".to_string(),
                ))
            }
            _ => Vec::new(),
        };

        Ok(QueryResponse {
            query_id: data.query_id.unwrap_or_default(),
            columns: data.rowtype.into_iter().map(|c| c.name).collect(),
            rows,
        })
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let url = format!("{}/session?delete=true", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.authorization())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Session close was not acknowledged");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_query_response() {
        let json = r#"{
            "data": {
                "queryId": "01b2-0000",
                "rowtype": [{"name": "N", "type": "fixed"}, {"name": "S", "type": "text"}],
                "rowset": [["1", "a"], [null, "b"]],
                "total": 2
            },
            "success": true,
            "message": null,
            "code": null
        }"#;
        let envelope: Envelope<QueryResponseData> = serde_json::from_str(json).unwrap();
        let data = envelope.into_data().unwrap();
        assert_eq!(data.query_id.as_deref(), Some("01b2-0000"));
        assert_eq!(data.rowtype.len(), 2);
        assert_eq!(data.rowset.unwrap()[1][0], Value::Null);
    }

    #[test]
    fn test_failed_envelope_becomes_query_error() {
        let json = r#"{"data": {"errorCode": "002003"}, "success": false,
                       "message": "Object 'X' does not exist", "code": "002003"}"#;
        let envelope: Envelope<QueryResponseData> = serde_json::from_str(json).unwrap();
        match envelope.into_data() {
            Err(Error::Query { code, message }) => {
                assert_eq!(code.as_deref(), Some("002003"));
                assert!(message.contains("does not exist"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_numeric_values_stringified() {
        assert_eq!(value_to_string(&Value::from(42)), Some("42".to_string()));
        assert_eq!(value_to_string(&Value::from("x")), Some("x".to_string()));
        assert_eq!(value_to_string(&Value::Null), None);
    }

    #[test]
    fn test_scalar() {
        let response = QueryResponse {
            query_id: "q".into(),
            columns: vec!["COUNT(*)".into()],
            rows: vec![vec![Some("7".into())]],
        };
        assert_eq!(response.scalar(), Some("7"));
        assert_eq!(response.column_index("count(*)"), Some(0));
    }
}
