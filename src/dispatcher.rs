//! Stateless dispatcher from tool calls to backend endpoints.
//!
//! Holds only read-only configuration (base URL and transport). Every call
//! builds its request from scratch, sends at most one HTTP request, and
//! maps the outcome to a value or a `ToolError`.

use serde_json::{Map, Value};
use tracing::{debug, info_span, warn};

use crate::backend::{HttpTransport, Transport};
use crate::config::{Config, DEFAULT_BACKEND_URL};
use crate::error::ToolError;
use crate::tools::{BackendRequest, build_request};

#[derive(Debug, Clone)]
pub struct Dispatcher<T: Transport = HttpTransport> {
    base_url: String,
    transport: T,
}

impl Dispatcher<HttpTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.backend_url)
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the `result` field of the backend reply.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<Value, ToolError> {
        let mut reply = self.dispatch_raw(name, arguments)?;
        match reply.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(ToolError::InvalidResponse(
                "response has no 'result' field".to_string(),
            )),
        }
    }

    /// Returns the whole decoded backend reply.
    pub fn dispatch_raw(
        &self,
        name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<Value, ToolError> {
        let result = build_request(name, arguments).and_then(|request| self.send(&request));
        match &result {
            // rejected before any request went out
            Err(err) if err.is_local() => {
                debug!(tool = name, error = %err, "tool call rejected");
            }
            Err(err) => warn!(tool = name, error = %err, "tool call failed"),
            Ok(_) => {}
        }
        result
    }

    fn send(&self, request: &BackendRequest) -> Result<Value, ToolError> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        let span = info_span!("tool_call", tool = request.tool, %url);
        let _guard = span.enter();

        let body = request.body_value();
        debug!(%body, "sending backend request");

        self.transport
            .post_json(&url, &body)
            .and_then(|resp| resp.into_json())
    }
}

/// Call a tool against the default local backend.
pub fn call_tool(name: &str, arguments: &Map<String, Value>) -> Result<Value, ToolError> {
    Dispatcher::new(DEFAULT_BACKEND_URL).call_tool(name, arguments)
}

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod tests;
