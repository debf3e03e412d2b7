use std::error::Error;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Serialize, Debug)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub tools: Vec<Value>,
    pub tool_choice: &'static str,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCallRequest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    pub fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(text.to_string()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn tool(tool_call_id: &str, content: String) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.to_string()),
        }
    }

    pub fn requested_calls(&self) -> &[ToolCallRequest] {
        self.tool_calls.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ToolCallRequest {
    pub id: String,
    #[serde(rename = "type", default = "function_kind")]
    pub kind: String,
    pub function: FunctionCall,
}

/// `arguments` is usually a JSON-encoded string; some local servers send an
/// object instead, so both are kept as-is.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

fn function_kind() -> String {
    "function".to_string()
}

#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub message: Message,
    #[allow(dead_code)]
    #[serde(default)]
    pub finish_reason: Option<String>,
}

pub fn send_chat(
    base_url: &str,
    api_key: Option<&str>,
    request: &ChatRequest,
) -> Result<ChatResponse, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let url = format!("{}/chat/completions", base_url.trim_end_matches('/'));
    let mut builder = client
        .post(&url)
        .header("content-type", "application/json")
        .json(request);
    if let Some(key) = api_key {
        builder = builder.bearer_auth(key);
    }
    let resp = builder.send()?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(format!("LLM API error ({status}): {body}").into());
    }

    let response: ChatResponse = resp.json()?;
    Ok(response)
}
