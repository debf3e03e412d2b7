//! HTTP transport to the analysis backend.
//!
//! One blocking POST per call, no retry, no connection reuse between calls.
//! The `Transport` trait is the seam
//! between request shaping and the network so the dispatcher can be driven
//! by an in-memory transport.

use serde_json::Value;

use crate::error::ToolError;

/// Status and raw body text of a backend reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    /// Decode a 200 reply as JSON; any other status becomes `ToolError::Backend`
    /// with the body left as text.
    pub fn into_json(self) -> Result<Value, ToolError> {
        if self.status != 200 {
            return Err(ToolError::Backend {
                status: self.status,
                body: self.body,
            });
        }
        serde_json::from_str(&self.body).map_err(|e| ToolError::InvalidResponse(e.to_string()))
    }
}

pub trait Transport {
    /// POST `body` as JSON to `url`. Only failures to complete the exchange
    /// are errors here; a non-200 status is still a response.
    fn post_json(&self, url: &str, body: &Value) -> Result<BackendResponse, ToolError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &str, body: &Value) -> Result<BackendResponse, ToolError> {
        (**self).post_json(url, body)
    }
}

/// `reqwest` blocking transport with the client's default timeout.
///
/// A fresh client is built for every call and dropped with it, so no
/// pooled connection outlives the call that opened it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<BackendResponse, ToolError> {
        let client = reqwest::blocking::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ToolError::Transport(e.to_string()))?;
        let resp = client
            .post(url)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .map_err(|e| ToolError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| ToolError::Transport(format!("reading response body: {e}")))?;
        Ok(BackendResponse { status, body })
    }
}
