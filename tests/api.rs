use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use study_timer::{
    create_router,
    host::{ActivityHost, HostCommand, HostHandle},
    persistence::MemoryStore,
    TimerState,
};

async fn launched_app(store: MemoryStore) -> (Router, HostHandle) {
    let (host, handle) = ActivityHost::new(store, Duration::from_secs(1));
    tokio::spawn(host.run());
    handle.send(HostCommand::Launch).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    (create_router(handle.clone()), handle)
}

async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test(start_paused = true)]
async fn start_pause_toggles_button() {
    let (app, _handle) = launched_app(MemoryStore::new()).await;

    let (status, body) = call(&app, "POST", "/start-pause").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["screen"]["button"], "RUNNING");
    assert_eq!(body["screen"]["screen"]["button"]["label"], "Pause");

    let (_, body) = call(&app, "POST", "/start-pause").await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["screen"]["screen"]["button"]["label"], "Start");
}

#[tokio::test(start_paused = true)]
async fn stop_reports_summary_and_saves() {
    let store = MemoryStore::new();
    let (app, _handle) = launched_app(store.clone()).await;
    call(&app, "POST", "/start-pause").await;
    tokio::time::sleep(Duration::from_millis(5500)).await;

    let (status, body) = call(&app, "POST", "/stop").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["screen"]["timer"]["seconds"], 0);
    assert_eq!(
        body["screen"]["screen"]["summary"],
        "You spent 0:00:05 studying last time"
    );
    assert_eq!(store.stored(), Some(TimerState::with_values(5, false, false)));
}

#[tokio::test(start_paused = true)]
async fn lifecycle_events_drive_the_screen() {
    let (app, _handle) = launched_app(MemoryStore::new()).await;

    let (status, body) = call(&app, "POST", "/lifecycle/background").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["screen"]["phase"], "stopped");
    assert_eq!(body["screen"]["visible"], false);

    let (status, body) = call(&app, "POST", "/lifecycle/foreground").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["screen"]["phase"], "resumed");
}

#[tokio::test(start_paused = true)]
async fn out_of_order_event_is_a_conflict() {
    let (app, _handle) = launched_app(MemoryStore::new()).await;

    let (status, body) = call(&app, "POST", "/lifecycle/foreground").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");

    let (status, _) = call(&app, "POST", "/lifecycle/launch").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test(start_paused = true)]
async fn unknown_event_is_not_found() {
    let (app, _handle) = launched_app(MemoryStore::new()).await;
    let (status, body) = call(&app, "POST", "/lifecycle/explode").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Unknown lifecycle event: explode");
}

#[tokio::test(start_paused = true)]
async fn status_and_health() {
    let (app, _handle) = launched_app(MemoryStore::new()).await;

    let (status, body) = call(&app, "GET", "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["screen"]["instance"], 1);
    assert_eq!(body["screen"]["screen"]["clock"], "0:00:00");

    let (status, body) = call(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test(start_paused = true)]
async fn dead_host_is_a_server_error() {
    let (app, handle) = launched_app(MemoryStore::new()).await;
    handle.shutdown().await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    let (status, _) = call(&app, "POST", "/start-pause").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
