use std::future::IntoFuture;

use aicode::{config::settings::Settings, modules, AppState};
use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use serde_json::json;

fn setup_test_server() -> TestServer {
    let state = AppState::new(Settings::default());

    let app = Router::new()
        .merge(modules::chat::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_hello_world_gets_code_suggestion() {
    let server = setup_test_server();

    let response = server
        .post("/chat")
        .json(&json!({
            "message": "Hello world"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["response_type"], "code_suggestion");
    assert!(!body["content"]["code"].as_str().unwrap().is_empty());
    assert_eq!(body["content"]["language"], "python");
    assert!(!body["content"]["text"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_code_keyword_is_case_insensitive() {
    let server = setup_test_server();

    for message in ["Write some CODE for me", "can you show me Code?", "HELLO WORLD in rust"] {
        let response = server
            .post("/chat")
            .json(&json!({ "message": message }))
            .await;

        response.assert_status(StatusCode::OK);

        let body: serde_json::Value = response.json();
        assert_eq!(body["response_type"], "code_suggestion", "message: {}", message);
        assert!(!body["content"]["code"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_plain_message_gets_text_echo() {
    let server = setup_test_server();

    let response = server
        .post("/chat")
        .json(&json!({
            "message": "What is the weather?"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["response_type"], "text");
    assert!(body["content"]["text"]
        .as_str()
        .unwrap()
        .contains("What is the weather?"));
    assert!(body["content"].get("code").is_none());
    assert!(body["content"].get("language").is_none());
}

#[tokio::test]
async fn test_context_and_history_are_accepted() {
    let server = setup_test_server();

    let response = server
        .post("/chat")
        .json(&json!({
            "message": "Explain this file",
            "context": {
                "fileContent": "fn main() {}",
                "filePath": "/tmp/main.rs",
                "nested": { "cursor": [3, 14] }
            },
            "history": [
                { "role": "user", "content": "hi" },
                "free-form entry",
                42
            ]
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["response_type"], "text");
}

#[tokio::test]
async fn test_missing_message_fails() {
    let server = setup_test_server();

    let response = server.post("/chat").json(&json!({})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json();
    assert!(body.get("response_type").is_none());
    assert!(body["message"].as_str().unwrap().contains("message"));
}

#[tokio::test]
async fn test_non_string_message_fails() {
    let server = setup_test_server();

    let response = server
        .post("/chat")
        .json(&json!({
            "message": 42
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_wrong_typed_context_fails() {
    let server = setup_test_server();

    let response = server
        .post("/chat")
        .json(&json!({
            "message": "hi",
            "context": ["not", "an", "object"]
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = server
        .post("/chat")
        .json(&json!({
            "message": "hi",
            "history": { "not": "a list" }
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    for field in ["context", "history"] {
        let response = server
            .post("/chat")
            .json(&json!({
                "message": "hi",
                field: null
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_malformed_json_fails() {
    let server = setup_test_server();

    let response = server
        .post("/chat")
        .bytes("{\"message\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_json_content_type_fails() {
    let server = setup_test_server();

    let response = server
        .post("/chat")
        .text("{\"message\": \"hello\"}")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_concurrent_requests_do_not_interfere() {
    let server = setup_test_server();

    let (first, second) = tokio::join!(
        server
            .post("/chat")
            .json(&json!({ "message": "first question" }))
            .into_future(),
        server
            .post("/chat")
            .json(&json!({ "message": "second question" }))
            .into_future(),
    );

    first.assert_status(StatusCode::OK);
    second.assert_status(StatusCode::OK);

    let first: serde_json::Value = first.json();
    let second: serde_json::Value = second.json();

    let first_text = first["content"]["text"].as_str().unwrap();
    let second_text = second["content"]["text"].as_str().unwrap();

    assert!(first_text.contains("first question"));
    assert!(!first_text.contains("second question"));
    assert!(second_text.contains("second question"));
    assert!(!second_text.contains("first question"));
}
