//! End-to-end tests of the listing API calls against a canned local HTTP server.

use std::time::Duration;

use backend::{
    api::breweries::{get_brewery_detail, list_brewery_page},
    api_utils::brewery_api_utils::{BreweryApiClient, BreweryApiConfig},
};
use common::{
    accumulator::{BreweryAccumulator, PageRequest},
    brewery::BreweryId,
    fetch_error::{AccumulatorError, FetchError},
};
use reqwest::Url;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

/// Serves a single response and reports the request line it received.
async fn serve_once(status: &'static str, body: &'static str) -> (BreweryApiClient, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }
        let request = String::from_utf8_lossy(&received);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = request_tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    let config = BreweryApiConfig {
        base_url: Url::parse(&format!("http://{addr}/v1/breweries")).unwrap(),
        per_page: 2,
        timeout: Duration::from_secs(5),
    };
    (BreweryApiClient::new(config).unwrap(), request_rx)
}

#[tokio::test]
async fn list_page_sends_paging_params_and_parses_body() {
    let (api, request_line) = serve_once(
        "200 OK",
        r#"[{"id":"1","name":"Ale House","brewery_type":"micro","state":"Texas"},{"id":"2","name":"Hop Co"}]"#,
    )
    .await;

    let page = list_brewery_page(&api, PageRequest { page: 4, per_page: 2 }).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].brewery_type.as_deref(), Some("micro"));
    assert_eq!(request_line.await.unwrap(), "GET /v1/breweries?per_page=2&page=4 HTTP/1.1");
}

#[tokio::test]
async fn list_page_ignores_client_page_size() {
    let (api, request_line) = serve_once("200 OK", "[]").await;
    let page = list_brewery_page(&api, PageRequest { page: 1, per_page: 10_000 }).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(request_line.await.unwrap(), "GET /v1/breweries?per_page=2&page=1 HTTP/1.1");
}

#[tokio::test]
async fn list_page_server_error_is_network_error() {
    let (api, _) = serve_once("503 Service Unavailable", "try later").await;
    let err = list_brewery_page(&api, PageRequest { page: 1, per_page: 2 }).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(message) if message.contains("503")));
}

#[tokio::test]
async fn list_page_with_object_body_is_malformed() {
    let (api, _) = serve_once("200 OK", r#"{"message":"oops"}"#).await;
    let err = list_brewery_page(&api, PageRequest { page: 1, per_page: 2 }).await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn detail_not_found() {
    let (api, request_line) = serve_once("404 Not Found", r#"{"message":"Couldn't find Brewery"}"#).await;
    let id = BreweryId::new("no-such-brewery");
    let err = get_brewery_detail(&api, &id).await.unwrap_err();
    assert_eq!(err, FetchError::NotFound(id));
    assert_eq!(request_line.await.unwrap(), "GET /v1/breweries/no-such-brewery HTTP/1.1");
}

#[tokio::test]
async fn detail_found() {
    let (api, _) = serve_once("200 OK", r#"{"id":"abc","name":"Dublin Stout","country":"Ireland"}"#).await;
    let brewery = get_brewery_detail(&api, &BreweryId::new("abc")).await.unwrap();
    assert_eq!(brewery.name, "Dublin Stout");
    assert_eq!(brewery.country.as_deref(), Some("Ireland"));
}

#[tokio::test]
async fn accumulator_over_http_source() {
    let (api, _) = serve_once("200 OK", r#"[{"id":"1","name":"Ale House"},{"id":"1","name":"Ale House"}]"#).await;
    let mut accumulator = BreweryAccumulator::new(api.config().per_page);
    let new_records = accumulator.fetch_next_page(&api).await.unwrap();
    assert_eq!(new_records.records.len(), 1);
    assert_eq!(accumulator.cursor().page(), 2);
}

#[tokio::test]
async fn unreachable_source_marks_page_failed() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = BreweryApiConfig {
        base_url: Url::parse(&format!("http://{addr}/v1/breweries")).unwrap(),
        per_page: 10,
        timeout: Duration::from_secs(2),
    };
    let api = BreweryApiClient::new(config).unwrap();

    let mut accumulator = BreweryAccumulator::new(10);
    let err = accumulator.fetch_next_page(&api).await.unwrap_err();
    assert!(matches!(err, AccumulatorError::Fetch(FetchError::Network(_))));
    assert_eq!(accumulator.failed_page(), Some(1));
    assert!(accumulator.collection().is_empty());
}
