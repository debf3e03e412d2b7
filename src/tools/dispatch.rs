//! Request builder for backend tool calls.
//!
//! Resolves a tool name against the tool table and shapes the caller's
//! arguments into the JSON body the backend endpoint expects: required
//! arguments are checked, optional ones receive their defaults, and each
//! value is written under its backend key. Every check happens here, before
//! any network call.

use serde_json::{Map, Value};
use tracing::debug;

use super::spec::{self, ToolSpec};
use crate::error::ToolError;

/// A fully shaped request for one backend endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub tool: &'static str,
    pub endpoint: &'static str,
    pub body: Map<String, Value>,
}

impl BackendRequest {
    pub fn body_value(&self) -> Value {
        Value::Object(self.body.clone())
    }
}

/// Build the backend request for `tool_name` from the caller's arguments.
///
/// A `null` argument counts as absent. Arguments the tool does not declare
/// are dropped.
pub fn build_request(
    tool_name: &str,
    arguments: &Map<String, Value>,
) -> Result<BackendRequest, ToolError> {
    let tool = spec::find(tool_name).ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

    for key in arguments.keys() {
        if !tool.params.iter().any(|p| p.name == key) {
            debug!(tool = tool.name, argument = %key, "ignoring undeclared argument");
        }
    }

    Ok(BackendRequest {
        tool: tool.name,
        endpoint: tool.endpoint,
        body: shape_body(tool, arguments)?,
    })
}

fn shape_body(
    tool: &ToolSpec,
    arguments: &Map<String, Value>,
) -> Result<Map<String, Value>, ToolError> {
    let mut body = Map::new();

    for param in tool.params {
        let supplied = arguments.get(param.name).filter(|v| !v.is_null());
        let value = match (supplied, param.default_value()) {
            (Some(val), _) => {
                if !param.kind.accepts(val) {
                    return Err(ToolError::InvalidArgument {
                        tool: tool.name.to_string(),
                        argument: param.name.to_string(),
                        expected: param.kind.expected(),
                    });
                }
                val.clone()
            }
            (None, Some(default)) => default,
            (None, None) => {
                return Err(ToolError::MissingArgument {
                    tool: tool.name.to_string(),
                    argument: param.name.to_string(),
                });
            }
        };
        body.insert(param.backend_key.to_string(), value);
    }

    Ok(body)
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;
