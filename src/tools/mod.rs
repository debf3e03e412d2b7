mod dispatch;
mod schema;
mod spec;

pub use dispatch::{BackendRequest, build_request};
pub use schema::tool_definitions;
pub use spec::{ParamKind, ParamSpec, Presence, TOOLS, ToolSpec, find};
