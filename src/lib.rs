//! Function-calling bridge to the morpho-rs analysis agent.
//!
//! Maps the three advertised tools (`list_rust_items`,
//! `analyze_rust_callgraph`, `get_rust_source`) onto the agent's HTTP
//! endpoints. Use [`Dispatcher::call_tool`] from a host that talks to an LLM
//! runtime, or [`envelope::handle`] for the one-shot stdio protocol.

pub mod backend;
pub mod chat;
pub mod config;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod tools;

#[cfg(test)]
mod testing;

pub use backend::{BackendResponse, HttpTransport, Transport};
pub use config::Config;
pub use dispatcher::{Dispatcher, call_tool};
pub use error::ToolError;
pub use tools::tool_definitions;
