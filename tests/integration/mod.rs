//! Integration tests for the demo service.
//!
//! Each test starts the real server on an ephemeral loopback port and talks
//! to it over HTTP.

use std::net::SocketAddr;

use api_avengers_demo::config::Config;
use api_avengers_demo::server;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running server and the means to stop it.
struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<api_avengers_demo::Result<()>>,
}

impl TestServer {
    async fn start(config: Config) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::run_until(listener, config, async {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(self.url(path)).await.unwrap()
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

fn config_with_env(env: &str) -> Config {
    Config::from_vars(vec![("ENV".to_string(), env.to_string())]).unwrap()
}

#[tokio::test]
async fn test_home_endpoint() {
    let server = TestServer::start(Config::default()).await;

    let response = server.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["message"].as_str().unwrap().contains("Hello World"));

    server.stop().await;
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::start(Config::default()).await;

    let response = server.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "healthy", "service": "demo-app" }));

    server.stop().await;
}

#[tokio::test]
async fn test_info_endpoint_defaults_to_development() {
    let server = TestServer::start(Config::default()).await;

    let response = server.get("/info").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["app"], "API Avengers Demo");
    assert_eq!(body["python_version"], "3.9+");
    assert_eq!(body["environment"], "development");

    server.stop().await;
}

#[tokio::test]
async fn test_info_endpoint_reports_staging() {
    let server = TestServer::start(config_with_env("staging")).await;

    let body: Value = server.get("/info").await.json().await.unwrap();
    assert_eq!(body["environment"], "staging");

    server.stop().await;
}

#[tokio::test]
async fn test_invalid_endpoint() {
    let server = TestServer::start(Config::default()).await;

    let response = server.get("/invalid").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = reqwest::Client::new()
        .delete(server.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    drop(response);

    server.stop().await;
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let server = TestServer::start(config_with_env("production")).await;

    for path in ["/", "/health", "/info"] {
        let first: Value = server.get(path).await.json().await.unwrap();
        for _ in 0..5 {
            let again: Value = server.get(path).await.json().await.unwrap();
            assert_eq!(again, first, "GET {path}");
        }
    }

    server.stop().await;
}
