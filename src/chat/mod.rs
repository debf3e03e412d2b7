//! Chat client that lets a function-calling model drive the backend tools.
//!
//! Sends the prompt and the tool catalog to an OpenAI-compatible chat
//! completions server, relays every requested tool call through the
//! dispatcher, and feeds the results back until the model answers in text.

mod client;

use std::error::Error;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

pub use client::{ChatRequest, ChatResponse, FunctionCall, Message, ToolCallRequest};

use crate::backend::Transport;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::envelope::{error_document, parse_arguments};
use crate::tools::tool_definitions;

const MAX_ITERATIONS: usize = 10;
const API_KEY_VAR: &str = "MORPHO_LLM_API_KEY";

pub fn run<T: Transport>(
    config: &Config,
    dispatcher: &Dispatcher<T>,
    prompt: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let api_key = std::env::var(API_KEY_VAR).ok();
    let answer = agentic_loop(&config.model, prompt, dispatcher, |request| {
        client::send_chat(&config.llm_url, api_key.as_deref(), request)
    })?;

    println!("{answer}");
    if let Some(out_path) = output {
        fs::write(out_path, &answer)?;
        info!("answer saved to {}", out_path.display());
    }
    Ok(())
}

/// Drive the conversation until the model stops requesting tools and
/// return its final text.
pub fn agentic_loop<T, F>(
    model: &str,
    prompt: &str,
    dispatcher: &Dispatcher<T>,
    mut complete: F,
) -> Result<String, Box<dyn Error>>
where
    T: Transport,
    F: FnMut(&ChatRequest) -> Result<ChatResponse, Box<dyn Error>>,
{
    let tools = tool_definitions();
    let mut messages = vec![Message::user(prompt)];

    for iteration in 0..MAX_ITERATIONS {
        let request = ChatRequest {
            model: model.to_string(),
            messages: messages.clone(),
            tools: tools.clone(),
            tool_choice: "auto",
        };

        info!(turn = iteration + 1, "calling chat completions");
        let response = complete(&request)?;
        let message = response
            .choices
            .into_iter()
            .next()
            .ok_or("chat completion returned no choices")?
            .message;

        if message.requested_calls().is_empty() {
            return Ok(message.content.unwrap_or_default());
        }

        let results: Vec<Message> = message
            .requested_calls()
            .iter()
            .map(|call| {
                info!(tool = %call.function.name, "running tool");
                Message::tool(&call.id, run_tool_call(dispatcher, &call.function))
            })
            .collect();

        messages.push(message);
        messages.extend(results);
    }

    Err(format!("Exceeded maximum iterations ({MAX_ITERATIONS})").into())
}

/// Tool output as message text. Failures go back to the model as
/// `{"error": ...}` instead of ending the conversation.
fn run_tool_call<T: Transport>(dispatcher: &Dispatcher<T>, call: &FunctionCall) -> String {
    let outcome = parse_arguments(&call.arguments)
        .and_then(|arguments| dispatcher.call_tool(&call.name, &arguments));
    match outcome {
        Ok(Value::String(text)) => text,
        Ok(other) => other.to_string(),
        Err(err) => error_document(&err).to_string(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
