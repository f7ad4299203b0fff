//! Canned replies for the chat endpoint.
//!
//! A message is answered with a sample snippet when it asks for code (or a
//! "hello world"), and echoed back through a fixed template otherwise.

use crate::modules::chat::schema::{ChatResponse, ResponseType};

const CODE_TRIGGERS: &[&str] = &["code", "hello world"];

const SAMPLE_INTRO: &str = "Here's a simple Python example to get you started:";
const SAMPLE_LANGUAGE: &str = "python";
const SAMPLE_CODE: &str = r#"def greet(name):
    return f"Hello, {name}!"

print(greet("World"))
"#;

pub fn classify(message: &str) -> ResponseType {
    let lowered = message.to_lowercase();

    if CODE_TRIGGERS.iter().any(|t| lowered.contains(t)) {
        ResponseType::CodeSuggestion
    } else {
        ResponseType::Text
    }
}

pub fn respond(message: &str) -> ChatResponse {
    match classify(message) {
        ResponseType::CodeSuggestion => ChatResponse::code_suggestion(
            SAMPLE_INTRO.to_string(),
            SAMPLE_CODE.to_string(),
            SAMPLE_LANGUAGE.to_string(),
        ),
        ResponseType::Text => ChatResponse::text(format!(
            "AIcode backend received: '{}'. (Phase 1)",
            message
        )),
    }
}
