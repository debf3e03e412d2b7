//! In-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use crate::backend::{BackendResponse, Transport};
use crate::error::ToolError;

/// Replays canned replies in order and records every request it receives.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<BackendResponse, ToolError>>>,
    requests: RefCell<Vec<(String, Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(BackendResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, err: ToolError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<BackendResponse, ToolError> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), body.clone()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {url}"))
    }
}
