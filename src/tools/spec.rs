//! Declarative table of the tools exposed to an LLM runtime.
//!
//! Each entry names the backend endpoint and the parameter contract. Both the
//! advertised JSON Schema (`schema.rs`) and the request builder
//! (`dispatch.rs`) read this table, so the two cannot disagree.

use serde_json::Value;

/// JSON type accepted for a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Boolean,
    StringArray,
}

impl ParamKind {
    /// Whether `value` has this kind. Arrays must hold strings only.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    /// Human phrasing used in `InvalidArgument` messages.
    pub fn expected(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Boolean => "a boolean",
            Self::StringArray => "an array of strings",
        }
    }
}

/// Whether a parameter must be supplied, and the value used when it is not.
#[derive(Debug, Clone, Copy)]
pub enum Presence {
    Required,
    Optional(fn() -> Value),
}

#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Name the LLM sees and supplies.
    pub name: &'static str,
    /// Key written into the backend request body.
    pub backend_key: &'static str,
    pub kind: ParamKind,
    pub presence: Presence,
    pub description: Option<&'static str>,
}

impl ParamSpec {
    pub fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }

    pub fn default_value(&self) -> Option<Value> {
        match self.presence {
            Presence::Required => None,
            Presence::Optional(default) => Some(default()),
        }
    }
}

#[derive(Debug)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Path on the backend, joined to the configured base URL.
    pub endpoint: &'static str,
    pub params: &'static [ParamSpec],
}

fn no() -> Value {
    Value::Bool(false)
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

const PUBLIC_ONLY: ParamSpec = ParamSpec {
    name: "public_only",
    backend_key: "public_only",
    kind: ParamKind::Boolean,
    presence: Presence::Optional(no),
    description: Some("Only show public API items (reduces token usage)"),
};

const BLACKLIST: ParamSpec = ParamSpec {
    name: "blacklist",
    backend_key: "blacklist",
    kind: ParamKind::StringArray,
    presence: Presence::Optional(empty_list),
    description: Some("Directories to exclude (e.g., ['target', 'tests'])"),
};

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "list_rust_items",
        description: "List all types and functions in a Rust project",
        endpoint: "/tool/list_all",
        params: &[PUBLIC_ONLY, BLACKLIST],
    },
    ToolSpec {
        name: "analyze_rust_callgraph",
        description: "Analyze Rust code to show which functions are called by a given function, with hierarchical tree visualization",
        endpoint: "/tool/generate_call_graph",
        params: &[
            ParamSpec {
                name: "function",
                backend_key: "root_function",
                kind: ParamKind::String,
                presence: Presence::Required,
                description: Some(
                    "The function to analyze (e.g., './src/lib.rs::generate_output' or 'generate_output')",
                ),
            },
            ParamSpec {
                description: Some("Only show public API functions"),
                ..PUBLIC_ONLY
            },
            BLACKLIST,
        ],
    },
    ToolSpec {
        name: "get_rust_source",
        description: "Get the formatted source code of a Rust function",
        endpoint: "/tool/get_source",
        params: &[
            ParamSpec {
                name: "function",
                backend_key: "function",
                kind: ParamKind::String,
                presence: Presence::Required,
                description: Some("Function name to retrieve source for"),
            },
            BLACKLIST,
        ],
    },
];

/// Look up a tool by the name an LLM runtime calls it with.
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|tool| tool.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("get_rust_source").unwrap().endpoint, "/tool/get_source");
        assert!(find("delete_everything").is_none());
    }

    #[test]
    fn string_array_rejects_mixed_items() {
        assert!(ParamKind::StringArray.accepts(&json!(["target", "tests"])));
        assert!(ParamKind::StringArray.accepts(&json!([])));
        assert!(!ParamKind::StringArray.accepts(&json!(["target", 1])));
        assert!(!ParamKind::StringArray.accepts(&json!("target")));
    }

    #[test]
    fn callgraph_renames_function_only() {
        let tool = find("analyze_rust_callgraph").unwrap();
        let keys: Vec<_> = tool.params.iter().map(|p| (p.name, p.backend_key)).collect();
        assert_eq!(
            keys,
            vec![
                ("function", "root_function"),
                ("public_only", "public_only"),
                ("blacklist", "blacklist"),
            ]
        );
    }

    #[test]
    fn optional_defaults() {
        assert_eq!(PUBLIC_ONLY.default_value(), Some(json!(false)));
        assert_eq!(BLACKLIST.default_value(), Some(json!([])));
        let function = &find("get_rust_source").unwrap().params[0];
        assert!(function.is_required());
        assert_eq!(function.default_value(), None);
    }
}
