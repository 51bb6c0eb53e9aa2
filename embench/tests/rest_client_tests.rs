//! REST session client against a mocked engine

use embench::client::{RestConnector, SqlSession};
use embench::config::ConnectionSettings;
use embench::Error;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(base_url: String) -> ConnectionSettings {
    ConnectionSettings {
        base_url,
        user: "bench".to_string(),
        password: "secret".to_string(),
        account: "acc".to_string(),
        database: "BENCH".to_string(),
        schema: "PUBLIC".to_string(),
        warehouse: "BENCH_WH".to_string(),
        request_timeout: Duration::from_secs(5),
    }
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/session/v1/login-request"))
        .and(query_param("warehouse", "BENCH_WH"))
        .and(body_partial_json(json!({
            "data": {"LOGIN_NAME": "bench", "PASSWORD": "secret", "ACCOUNT_NAME": "acc"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"token": "tok-1", "masterToken": "m"},
            "success": true,
            "message": null,
            "code": null
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_and_query() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/queries/v1/query-request"))
        .and(header("authorization", "Snowflake Token=\"tok-1\""))
        .and(body_partial_json(json!({"sqlText": "SELECT 1 AS N", "asyncExec": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "queryId": "01b3-aaaa",
                "rowtype": [{"name": "N", "type": "fixed"}],
                "rowset": [["1"]]
            },
            "success": true
        })))
        .mount(&server)
        .await;

    let connector = RestConnector::new(settings(server.uri())).unwrap();
    let mut session = connector.login().await.unwrap();
    let response = session.execute("SELECT 1 AS N").await.unwrap();

    assert_eq!(response.query_id, "01b3-aaaa");
    assert_eq!(response.columns, vec!["N".to_string()]);
    assert_eq!(response.scalar(), Some("1"));
}

#[tokio::test]
async fn test_rejected_statement_is_query_error() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/queries/v1/query-request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"queryId": "01b3-bbbb"},
            "success": false,
            "message": "SQL compilation error: Object 'NOPE' does not exist",
            "code": "002003"
        })))
        .mount(&server)
        .await;

    let connector = RestConnector::new(settings(server.uri())).unwrap();
    let mut session = connector.login().await.unwrap();
    let err = session.execute("SELECT * FROM NOPE").await.unwrap_err();

    match err {
        Error::Query { code, message } => {
            assert_eq!(code.as_deref(), Some("002003"));
            assert!(message.contains("does not exist"));
        }
        other => panic!("expected query error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bad_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/v1/login-request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "success": false,
            "message": "Incorrect username or password was specified.",
            "code": "390100"
        })))
        .mount(&server)
        .await;

    let connector = RestConnector::new(settings(server.uri())).unwrap();
    let err = connector.login().await.unwrap_err();
    assert!(err.to_string().contains("Incorrect username"));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/v1/login-request"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let connector = RestConnector::new(settings(server.uri())).unwrap();
    let err = connector.login().await.unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_close_deletes_session_once() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .and(query_param("delete", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let connector = RestConnector::new(settings(server.uri())).unwrap();
    let mut session = connector.login().await.unwrap();
    session.close().await.unwrap();
    session.close().await.unwrap();

    assert!(session.execute("SELECT 1").await.is_err());
}

#[tokio::test]
async fn test_running_query_polls_result_url() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/queries/v1/query-request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"queryId": "01-running", "getResultUrl": "/queries/01-running/result"},
            "success": true,
            "code": "333334",
            "message": "Asynchronous execution in progress."
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/queries/01-running/result"))
        .and(header("authorization", "Snowflake Token=\"tok-1\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "queryId": "01-running",
                "rowtype": [{"name": "C", "type": "fixed"}],
                "rowset": [["6001215"]]
            },
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let connector = RestConnector::new(settings(server.uri())).unwrap();
    let mut session = connector.login().await.unwrap();
    let response = session.execute("SELECT COUNT(*) AS C FROM lineitem").await.unwrap();

    assert_eq!(response.query_id, "01-running");
    assert_eq!(response.scalar(), Some("6001215"));
}

#[tokio::test]
async fn test_running_query_without_result_url() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/queries/v1/query-request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"queryId": "01-running"},
            "success": true,
            "code": "333333"
        })))
        .mount(&server)
        .await;

    let connector = RestConnector::new(settings(server.uri())).unwrap();
    let mut session = connector.login().await.unwrap();
    let err = session.execute("SELECT 1").await.unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
}

#[tokio::test]
async fn test_chunked_result_is_rejected() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/queries/v1/query-request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "queryId": "01-big",
                "rowtype": [{"name": "N", "type": "fixed"}],
                "rowset": [["1"]],
                "chunks": [{"url": "https://stage/chunk0", "rowCount": 50000}]
            },
            "success": true
        })))
        .mount(&server)
        .await;

    let connector = RestConnector::new(settings(server.uri())).unwrap();
    let mut session = connector.login().await.unwrap();
    let err = session.execute("SELECT * FROM lineitem").await.unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
    assert!(err.to_string().contains("chunks"));
}
