//! Test helpers: routers over in-memory and mocked sources

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use optimizer::{
    EngineConfig, InMemoryPlayerSource, LineupEngine, MockPlayerSource, OptimizerError, OptimizerResult,
    PlayerSource,
};
use shared::PlayerRecord;
use webserver::{WebServer, DEFAULT_REQUEST_TIMEOUT};

pub struct TestHelpers;

impl TestHelpers {
    pub fn bind_address() -> SocketAddr {
        "127.0.0.1:5001".parse().unwrap()
    }

    pub fn server_with<P: PlayerSource + 'static>(source: P, timeout: Duration) -> WebServer<P> {
        WebServer::new(
            Self::bind_address(),
            timeout,
            LineupEngine::new(source, EngineConfig::default()),
        )
    }

    pub fn router_with(records: Vec<PlayerRecord>) -> Router {
        Self::server_with(InMemoryPlayerSource::new(records), DEFAULT_REQUEST_TIMEOUT).build_router()
    }

    /// Router over a source whose upstream is down
    pub fn failing_router() -> Router {
        let mut source = MockPlayerSource::new();
        source
            .expect_fetch_players()
            .returning(|| Err(OptimizerError::source_unavailable("feed returned 503")));
        source.expect_describe().returning(|| "failing source".to_string()).times(0..);
        Self::server_with(source, DEFAULT_REQUEST_TIMEOUT).build_router()
    }

    pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        Self::send(router, request).await
    }

    pub async fn post_json(router: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
        Self::post_raw(router, uri, &body.to_string()).await
    }

    pub async fn post_raw(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        Self::send(router, request).await
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}

/// Source that answers only after a delay
pub struct SlowPlayerSource {
    pub delay: Duration,
    pub records: Vec<PlayerRecord>,
}

#[async_trait]
impl PlayerSource for SlowPlayerSource {
    async fn fetch_players(&self) -> OptimizerResult<Vec<PlayerRecord>> {
        tokio::time::sleep(self.delay).await;
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("slow source ({:?})", self.delay)
    }
}
