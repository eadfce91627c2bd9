use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use haunted_house_api::{
    application::{self, ApplicationEnv, ApplicationState},
    repository::InMemoryTicketsRepository,
    service::tickets_service::{TicketsServiceConfig, TicketsServiceImpl},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub const IMMEDIATE_ENTRY_SLOT: &str = "今すぐ入場";
pub const MAX_TICKETS_PER_SLOT: u64 = 5;
pub const MAX_HTTP_CONTENT_LEN: usize = 1024;

pub fn test_env() -> ApplicationEnv {
    ApplicationEnv {
        log_directory: "logs".to_string(),
        log_filename: "test.log".to_string(),
        bind_address: "127.0.0.1:0".parse().unwrap(),
        supabase_url: "http://127.0.0.1:9".to_string(),
        supabase_key: "test-key".to_string(),
        max_tickets_per_slot: MAX_TICKETS_PER_SLOT,
        immediate_entry_slot: IMMEDIATE_ENTRY_SLOT.to_string(),
        max_http_content_len: MAX_HTTP_CONTENT_LEN,
    }
}

///
/// Full application backed by an empty in-memory ticket store
///
pub fn create_test_application() -> Router {
    let env = test_env();

    let config = TicketsServiceConfig {
        max_tickets_per_slot: env.max_tickets_per_slot,
        immediate_entry_slot: env.immediate_entry_slot.clone(),
    };
    let repository = Arc::new(InMemoryTicketsRepository::new());
    let tickets_service = Arc::new(TicketsServiceImpl::new(config, repository));

    application::create_application(
        ApplicationState { tickets_service },
        application::create_middleware(&env),
    )
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = match bytes.is_empty() {
        true => Value::Null,
        false => serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    };

    (status, body)
}

pub fn ticket_body(guest_name: Option<&str>, scheduled_time: &str) -> Value {
    json!({
        "guest_name": guest_name,
        "adult_count": 2,
        "child_count": 1,
        "scheduled_time": scheduled_time,
        "secret_word": "須貝研2026",
    })
}

///
/// Creates ticket and returns stored record
///
pub async fn create_ticket(app: &Router, guest_name: Option<&str>, scheduled_time: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/tickets",
        Some(ticket_body(guest_name, scheduled_time)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["data"][0].clone()
}

pub fn id_of(ticket: &Value) -> String {
    ticket["id"].as_str().unwrap().to_string()
}
