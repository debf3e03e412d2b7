//! Stdio envelope: one tool call in, one JSON document out.
//!
//! Input is `{"name": ..., "arguments": ...}`. `arguments` may be an object,
//! a string holding a JSON object (the form LLM runtimes emit), or absent.
//! Output is the `result` payload of the backend's reply, or
//! `{"error": "..."}` for any failure including malformed input.

use std::io::{self, Read, Write};

use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::backend::Transport;
use crate::dispatcher::Dispatcher;
use crate::error::ToolError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    pub fn parse(input: &str) -> Result<Self, ToolError> {
        serde_json::from_str(input).map_err(|e| ToolError::InvalidRequest(e.to_string()))
    }

    /// The arguments as a map. String arguments are parsed as JSON text,
    /// never interpreted any other way.
    pub fn argument_map(&self) -> Result<Map<String, Value>, ToolError> {
        parse_arguments(&self.arguments)
    }
}

pub fn parse_arguments(arguments: &Value) -> Result<Map<String, Value>, ToolError> {
    match arguments {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map.clone()),
        Value::String(text) if text.trim().is_empty() => Ok(Map::new()),
        Value::String(text) => match serde_json::from_str(text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ToolError::InvalidRequest(
                "arguments must be a JSON object".to_string(),
            )),
            Err(e) => Err(ToolError::InvalidRequest(format!(
                "arguments are not valid JSON: {e}"
            ))),
        },
        _ => Err(ToolError::InvalidRequest(
            "arguments must be a JSON object".to_string(),
        )),
    }
}

/// `{"error": "<message>"}`.
pub fn error_document(err: &ToolError) -> Value {
    json!({ "error": err.to_string() })
}

/// Resolve one raw request into the output document.
pub fn respond<T: Transport>(input: &str, dispatcher: &Dispatcher<T>) -> Value {
    let outcome = ToolCall::parse(input).and_then(|call| {
        let arguments = call.argument_map()?;
        dispatcher.call_tool(&call.name, &arguments)
    });
    match outcome {
        Ok(reply) => reply,
        Err(err) => error_document(&err),
    }
}

/// Read one request from `reader`, write one document to `writer`.
///
/// The output is serialized in full before the single write. Only failures
/// of the channels themselves are returned.
pub fn handle<R: Read, W: Write, T: Transport>(
    mut reader: R,
    mut writer: W,
    dispatcher: &Dispatcher<T>,
) -> io::Result<()> {
    let mut input = String::new();
    let document = match reader.read_to_string(&mut input) {
        Ok(_) => respond(&input, dispatcher),
        Err(e) => error_document(&ToolError::InvalidRequest(format!("reading input: {e}"))),
    };

    let mut out = serde_json::to_string(&document)?;
    out.push('\n');
    writer.write_all(out.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
