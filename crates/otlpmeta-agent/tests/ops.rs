//! App state wiring and ops handlers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use otlpmeta_agent::app_state::AppState;
use otlpmeta_agent::binder::{FileDescriptorStats, OsIntrospection, Unsupported};
use otlpmeta_agent::{config, ops};

struct FixedHost;

impl FileDescriptorStats for FixedHost {
    fn open_file_descriptor_count(&self) -> i64 {
        7
    }
    fn max_file_descriptor_count(&self) -> i64 {
        4096
    }
}

impl OsIntrospection for FixedHost {
    fn file_descriptor_stats(self: Arc<Self>) -> Option<Arc<dyn FileDescriptorStats>> {
        Some(self)
    }
}

const CFG: &str = r#"
version: 1
tags:
  app: demo
properties:
  otlp.headers: "authorization=Bearer secret,x-tenant=acme"
  otlp.resourceAttributes: "service.name=demo"
  otlp.url: "http://collector:4318/v1/metrics"
  otlp.step: "1m"
"#;

fn state(host: Arc<dyn OsIntrospection>) -> AppState {
    AppState::with_host(config::load_from_str(CFG).unwrap(), host).unwrap()
}

#[tokio::test]
async fn healthz_ok() {
    let resp = ops::healthz().await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn metrics_renders_bound_gauges() {
    let resp = ops::metrics(State(state(Arc::new(FixedHost)))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("process_open_fds{app=\"demo\"} 7\n"));
    assert!(body.contains("process_max_fds{app=\"demo\"} 4096\n"));
}

#[tokio::test]
async fn metrics_empty_without_capability() {
    let st = state(Arc::new(Unsupported));
    assert!(st.registry().is_empty());

    let resp = ops::metrics(State(st)).await;
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn exporter_view_hides_header_values() {
    let resp = ops::exporter(State(state(Arc::new(Unsupported)))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["url"], "http://collector:4318/v1/metrics");
    assert_eq!(v["step_secs"], 60);
    assert_eq!(v["header_keys"], serde_json::json!(["authorization", "x-tenant"]));
    assert_eq!(v["resource_attributes"]["service.name"], "demo");
    assert!(!String::from_utf8_lossy(&body).contains("secret"));
}
