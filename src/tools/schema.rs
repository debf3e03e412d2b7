//! Tool schema catalog for function-calling LLM runtimes.
//!
//! Generates the OpenAI-style `{"type": "function", "function": {...}}`
//! entries from the tool table. Optional parameters advertise their default
//! so the model sees the same values the request builder fills in.

use serde_json::{Map, Value, json};

use super::spec::{ParamKind, ParamSpec, TOOLS, ToolSpec};

/// JSON Schema property for a single parameter.
fn property(param: &ParamSpec) -> Value {
    let mut prop = match param.kind {
        ParamKind::String => json!({"type": "string"}),
        ParamKind::Boolean => json!({"type": "boolean"}),
        ParamKind::StringArray => json!({"type": "array", "items": {"type": "string"}}),
    };
    if let Some(desc) = param.description {
        prop["description"] = json!(desc);
    }
    if let Some(default) = param.default_value() {
        prop["default"] = default;
    }
    prop
}

fn tool(spec: &ToolSpec) -> Value {
    let mut props = Map::new();
    for param in spec.params {
        props.insert(param.name.into(), property(param));
    }
    let required: Vec<&str> = spec
        .params
        .iter()
        .filter(|p| p.is_required())
        .map(|p| p.name)
        .collect();

    json!({
        "type": "function",
        "function": {
            "name": spec.name,
            "description": spec.description,
            "parameters": {
                "type": "object",
                "properties": Value::Object(props),
                "required": required
            }
        }
    })
}

/// Return the schema entry of every tool, in table order.
pub fn tool_definitions() -> Vec<Value> {
    TOOLS.iter().map(tool).collect()
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
