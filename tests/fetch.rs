mod common;

use airport_info::api::AirportClient;
use airport_info::config::ApiConfig;
use airport_info::error::LookupError;
use common::{http_response, serve_once, JFK_BODY};
use std::time::Duration;
use tokio::net::TcpListener;

#[tokio::test]
async fn fetch_sends_identifier_as_query_param() {
    let (config, request_line) = serve_once(http_response("200 OK", JFK_BODY), Duration::ZERO).await;
    let client = AirportClient::new(&config).unwrap();

    let raw = client.fetch("KJFK").await.unwrap();
    assert_eq!(raw.text("icaoId").as_deref(), Some("KJFK"));

    let line = request_line.await.unwrap();
    assert!(line.starts_with("GET /api/data/airport?ids=KJFK&format=json "), "{}", line);
}

#[tokio::test]
async fn server_error_reports_status_code() {
    let (config, _) = serve_once(http_response("500 Internal Server Error", ""), Duration::ZERO).await;
    let client = AirportClient::new(&config).unwrap();

    let err = client.fetch("KJFK").await.unwrap_err();
    assert!(matches!(err, LookupError::HttpStatus(500)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn empty_array_is_not_found() {
    let (config, _) = serve_once(http_response("200 OK", "[]"), Duration::ZERO).await;
    let client = AirportClient::new(&config).unwrap();

    let err = client.fetch("ZZZZ").await.unwrap_err();
    assert!(matches!(err, LookupError::NotFound));
}

#[tokio::test]
async fn slow_server_times_out() {
    let (mut config, _) = serve_once(http_response("200 OK", JFK_BODY), Duration::from_secs(3)).await;
    config.timeout_seconds = 1;
    let client = AirportClient::new(&config).unwrap();

    let err = client.fetch("KJFK").await.unwrap_err();
    assert!(matches!(err, LookupError::Timeout), "{:?}", err);
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig {
        base_url: format!("http://{}/api/data/airport", addr),
        timeout_seconds: 5,
    };
    let client = AirportClient::new(&config).unwrap();

    let err = client.fetch("KJFK").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)), "{:?}", err);
}
