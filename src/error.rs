//! Error type shared by dispatch, transport and the stdio envelope.
//!
//! The first three variants are local checks raised before any network I/O.
//! `Backend` and `Transport` separate "the backend answered with a failure"
//! from "the request never completed".

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("missing required argument '{argument}' for tool '{tool}'")]
    MissingArgument { tool: String, argument: String },

    #[error("argument '{argument}' for tool '{tool}' must be {expected}")]
    InvalidArgument {
        tool: String,
        argument: String,
        expected: &'static str,
    },

    #[error("invalid tool call: {0}")]
    InvalidRequest(String),

    /// Non-200 reply. The body is kept as raw text; error bodies need not be JSON.
    #[error("HTTP {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid backend response: {0}")]
    InvalidResponse(String),
}

impl ToolError {
    /// True for failures detected before a request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_)
                | Self::MissingArgument { .. }
                | Self::InvalidArgument { .. }
                | Self::InvalidRequest(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display_matches_handler_format() {
        let err = ToolError::Backend {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn local_errors_are_flagged() {
        assert!(ToolError::UnknownTool("x".into()).is_local());
        assert!(!ToolError::Transport("refused".into()).is_local());
        assert!(
            !ToolError::Backend {
                status: 500,
                body: String::new()
            }
            .is_local()
        );
    }
}
