//! HttpClient tests against a local server on an ephemeral port.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;

use blog_summarizer::scrapers::{FetchError, HttpClient, PageFetcher};

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/ok", get(|| async { "<html><body><p>Hello.</p></body></html>" }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nope") }))
        .route("/forbidden", get(|| async { (StatusCode::FORBIDDEN, "no") }))
        .route("/boom", get(|| async { (StatusCode::BAD_GATEWAY, "upstream") }))
        .route("/empty", get(|| async { "" }))
        .route("/blank", get(|| async { "   \n" }))
        .route("/gone", get(|| async { (StatusCode::GONE, "<p>Moved on.</p>") }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "late"
            }),
        )
        .route(
            "/agent",
            get(|headers: HeaderMap| async move {
                headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client() -> HttpClient {
    HttpClient::new(Duration::from_millis(500)).expect("Failed to build client")
}

#[tokio::test]
async fn fetch_returns_body() {
    let addr = spawn_server().await;
    let html = client().fetch(&format!("http://{addr}/ok")).await.unwrap();
    assert!(html.contains("Hello."));
}

#[tokio::test]
async fn fetch_maps_status_codes() {
    let addr = spawn_server().await;
    let client = client();

    let err = client.fetch(&format!("http://{addr}/missing")).await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound));

    let err = client.fetch(&format!("http://{addr}/forbidden")).await.unwrap_err();
    assert!(matches!(err, FetchError::Forbidden));

    let err = client.fetch(&format!("http://{addr}/boom")).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn fetch_passes_other_client_errors_through() {
    let addr = spawn_server().await;
    let html = client().fetch(&format!("http://{addr}/gone")).await.unwrap();
    assert_eq!(html, "<p>Moved on.</p>");
}

#[tokio::test]
async fn fetch_rejects_missing_body() {
    let addr = spawn_server().await;
    let err = client().fetch(&format!("http://{addr}/empty")).await.unwrap_err();
    assert!(matches!(err, FetchError::EmptyResponse));
}

#[tokio::test]
async fn fetch_keeps_whitespace_only_body() {
    let addr = spawn_server().await;
    let body = client().fetch(&format!("http://{addr}/blank")).await.unwrap();
    assert_eq!(body, "   \n");
}

#[tokio::test]
async fn fetch_times_out() {
    let addr = spawn_server().await;
    let err = client().fetch(&format!("http://{addr}/slow")).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn fetch_unreachable_host_is_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client().fetch(&format!("http://{addr}/")).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn fetch_sends_configured_user_agent() {
    let addr = spawn_server().await;
    let client = HttpClient::with_user_agent(Duration::from_secs(2), Some("summarizer-test/1.0"))
        .unwrap();
    assert_eq!(client.user_agent(), "summarizer-test/1.0");

    let agent = client.fetch(&format!("http://{addr}/agent")).await.unwrap();
    assert_eq!(agent, "summarizer-test/1.0");
}
