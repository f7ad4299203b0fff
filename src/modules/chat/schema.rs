use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Editor context, e.g. the active file's path and content.
    #[serde(default)]
    pub context: Map<String, Value>,
    #[serde(default)]
    pub history: Vec<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Text,
    CodeSuggestion,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponseContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response_type: ResponseType,
    pub content: ChatResponseContent,
}

impl ChatResponse {
    pub fn text(text: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            content: ChatResponseContent {
                text: Some(text),
                ..Default::default()
            },
        }
    }

    pub fn code_suggestion(text: String, code: String, language: String) -> Self {
        Self {
            response_type: ResponseType::CodeSuggestion,
            content: ChatResponseContent {
                text: Some(text),
                code: Some(code),
                language: Some(language),
            },
        }
    }
}
