use super::*;
use crate::testing::MockTransport;
use serde_json::json;

const BASE: &str = "http://backend.test";

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn call_tool_unwraps_result() {
    let mock = MockTransport::new().reply(200, r#"{"result": {"items": ["a", "b"]}}"#);
    let dispatcher = Dispatcher::with_transport(BASE, &mock);

    let value = dispatcher.call_tool("list_rust_items", &Map::new()).unwrap();
    assert_eq!(value, json!({"items": ["a", "b"]}));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "http://backend.test/tool/list_all");
    assert_eq!(requests[0].1, json!({"public_only": false, "blacklist": []}));
}

#[test]
fn dispatch_raw_passes_whole_body() {
    let mock = MockTransport::new().reply(200, r#"{"result": "fn main() {}"}"#);
    let dispatcher = Dispatcher::with_transport(BASE, &mock);

    let value = dispatcher
        .dispatch_raw("get_rust_source", &args(json!({"function": "main"})))
        .unwrap();
    assert_eq!(value, json!({"result": "fn main() {}"}));
}

#[test]
fn callgraph_posts_root_function() {
    let mock = MockTransport::new().reply(200, r#"{"result": ""}"#);
    let dispatcher = Dispatcher::with_transport(BASE, &mock);

    dispatcher
        .call_tool("analyze_rust_callgraph", &args(json!({"function": "foo"})))
        .unwrap();

    let (url, body) = &mock.requests()[0];
    assert_eq!(url, "http://backend.test/tool/generate_call_graph");
    assert_eq!(body["root_function"], "foo");
    assert!(body.get("function").is_none());
}

#[test]
fn unknown_tool_sends_nothing() {
    let mock = MockTransport::new();
    let dispatcher = Dispatcher::with_transport(BASE, &mock);

    let err = dispatcher
        .call_tool("delete_everything", &Map::new())
        .unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(ref name) if name == "delete_everything"));
    assert!(mock.requests().is_empty());
}

#[test]
fn missing_function_sends_nothing() {
    let mock = MockTransport::new();
    let dispatcher = Dispatcher::with_transport(BASE, &mock);

    for tool in ["analyze_rust_callgraph", "get_rust_source"] {
        let err = dispatcher.dispatch_raw(tool, &Map::new()).unwrap_err();
        assert!(matches!(err, ToolError::MissingArgument { .. }));
    }
    assert!(mock.requests().is_empty());
}

#[test]
fn backend_404_is_backend_error() {
    let mock = MockTransport::new().reply(404, "not found");
    let dispatcher = Dispatcher::with_transport(BASE, &mock);

    let err = dispatcher.call_tool("list_rust_items", &Map::new()).unwrap_err();
    match err {
        ToolError::Backend { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn transport_error_is_returned_not_raised() {
    let mock = MockTransport::new().fail(ToolError::Transport("connection refused".into()));
    let dispatcher = Dispatcher::with_transport(BASE, &mock);

    let err = dispatcher.call_tool("list_rust_items", &Map::new()).unwrap_err();
    assert_eq!(err.to_string(), "transport error: connection refused");
}

#[test]
fn missing_result_field_is_invalid_response() {
    let mock = MockTransport::new().reply(200, r#"{"items": []}"#);
    let dispatcher = Dispatcher::with_transport(BASE, &mock);

    let err = dispatcher.call_tool("list_rust_items", &Map::new()).unwrap_err();
    assert!(matches!(err, ToolError::InvalidResponse(_)));
}

#[test]
fn repeated_calls_send_identical_bodies() {
    let mock = MockTransport::new()
        .reply(200, r#"{"result": 1}"#)
        .reply(200, r#"{"result": 1}"#);
    let dispatcher = Dispatcher::with_transport(BASE, &mock);
    let input = args(json!({"function": "foo", "public_only": true}));

    dispatcher.call_tool("analyze_rust_callgraph", &input).unwrap();
    dispatcher.call_tool("analyze_rust_callgraph", &input).unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        serde_json::to_string(&requests[0].1).unwrap(),
        serde_json::to_string(&requests[1].1).unwrap()
    );
}

#[test]
fn trailing_slash_on_base_url_is_trimmed() {
    let mock = MockTransport::new().reply(200, r#"{"result": null}"#);
    let dispatcher = Dispatcher::with_transport("http://backend.test/", &mock);
    assert_eq!(dispatcher.base_url(), "http://backend.test");

    dispatcher.call_tool("list_rust_items", &Map::new()).unwrap();
    assert_eq!(mock.requests()[0].0, "http://backend.test/tool/list_all");
}

#[test]
fn from_config_uses_configured_url() {
    let config = Config::default().with_backend_url(Some("http://10.1.2.3:8080"));
    let dispatcher = Dispatcher::from_config(&config);
    assert_eq!(dispatcher.base_url(), "http://10.1.2.3:8080");
}

#[derive(Clone, Default)]
struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn captured_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn transport_failure_is_warned_once() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let dispatcher = Dispatcher::new(&format!("http://{addr}"));

    let logs = captured_logs(|| {
        let err = dispatcher.call_tool("list_rust_items", &Map::new()).unwrap_err();
        assert!(matches!(err, ToolError::Transport(_)));
    });
    assert_eq!(logs.matches("WARN").count(), 1, "{logs}");
    assert!(logs.contains("tool call failed"));
}

#[test]
fn local_rejection_logs_at_debug_only() {
    let mock = MockTransport::new();
    let dispatcher = Dispatcher::with_transport(BASE, &mock);

    let logs = captured_logs(|| {
        dispatcher.call_tool("delete_everything", &Map::new()).unwrap_err();
    });
    assert!(!logs.contains("WARN"), "{logs}");
    assert!(logs.contains("tool call rejected"));
}
