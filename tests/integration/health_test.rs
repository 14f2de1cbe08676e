//! Health Endpoint Integration Tests
//!
//! The endpoint must answer 200 with provider wiring details no matter how
//! the service is configured.

use crate::common::{live_config, spawn_app, stub_config};

#[tokio::test]
async fn test_health_reports_stub_wiring() {
    let addr = spawn_app(stub_config()).await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["use_ollama"], false);
    assert_eq!(body["provider"], "test");
    assert_eq!(body["model_name"], "TestModel");
    assert_eq!(body["service_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["pid"].is_u64());
}

#[tokio::test]
async fn test_health_reports_live_wiring() {
    // No upstream needs to be reachable; health never calls the provider.
    let addr = spawn_app(live_config("http://127.0.0.1:9")).await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["use_ollama"], true);
    assert_eq!(body["provider"], "ollama");
    assert_eq!(body["model_name"], "qwen2.5:1.5b-instruct");
}
