//! Sends one chat message to a running backend, the way the editor extension does.
//!
//! Run with: cargo run --bin send_message -- "write some code" [path/to/file]

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::env;

#[derive(Debug, Serialize)]
struct ChatRequest {
    message: String,
    context: Value,
    history: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseContent {
    text: Option<String>,
    code: Option<String>,
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response_type: String,
    content: ChatResponseContent,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut args = env::args().skip(1);
    let Some(message) = args.next() else {
        anyhow::bail!("usage: send_message <message> [file]");
    };

    let (file_path, file_content) = match args.next() {
        Some(path) => {
            let content = tokio::fs::read_to_string(&path).await?;
            (path, content)
        }
        None => (String::new(), String::new()),
    };

    let base_url = env::var("AICODE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let url = format!("{}/chat", base_url.trim_end_matches('/'));

    let request = ChatRequest {
        message,
        context: json!({
            "fileContent": file_content,
            "filePath": file_path,
        }),
        history: Vec::new(),
    };

    println!("→ POST {}", url);

    let response = match Client::new().post(&url).json(&request).send().await {
        Ok(resp) => resp,
        Err(e) if e.is_connect() => {
            println!("❌ Connection to {} refused. Is the backend running?", base_url);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let status = response.status();
    if !status.is_success() {
        println!("❌ HTTP {}: {}", status, response.text().await.unwrap_or_default());
        return Ok(());
    }

    let reply: ChatResponse = response.json().await?;

    match reply.response_type.as_str() {
        "text" => {
            println!("{}", reply.content.text.unwrap_or_default());
        }
        "code_suggestion" => {
            if let Some(text) = reply.content.text {
                println!("{}\n", text);
            }
            println!(
                "```{}\n{}```",
                reply.content.language.unwrap_or_default(),
                reply.content.code.unwrap_or_default()
            );
        }
        other => {
            println!("Received an unknown response type from the backend: {}", other);
        }
    }

    Ok(())
}
