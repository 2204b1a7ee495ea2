mod common;

use common::registry;
use dokploy_mcp::McpServer;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines};
use tokio::task::JoinHandle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Session {
    input: DuplexStream,
    output: Lines<BufReader<DuplexStream>>,
    server: JoinHandle<anyhow::Result<()>>,
}

impl Session {
    fn start(base_url: &str) -> Self {
        let (input, server_input) = tokio::io::duplex(64 * 1024);
        let (server_output, output) = tokio::io::duplex(64 * 1024);

        let server = Arc::new(McpServer::new(registry(base_url)));
        let server = tokio::spawn(server.serve(server_input, server_output));

        Self {
            input,
            output: BufReader::new(output).lines(),
            server,
        }
    }

    async fn send(&mut self, message: Value) {
        self.send_raw(&message.to_string()).await;
    }

    async fn send_raw(&mut self, line: &str) {
        self.send_bytes(line.as_bytes()).await;
        self.input.write_all(b"\n").await.unwrap();
    }

    async fn send_bytes(&mut self, bytes: &[u8]) {
        self.input.write_all(bytes).await.unwrap();
    }

    async fn receive(&mut self) -> Value {
        let line = tokio::time::timeout(Duration::from_secs(10), self.output.next_line())
            .await
            .expect("response within timeout")
            .unwrap()
            .expect("stream still open");
        serde_json::from_str(&line).unwrap()
    }

    async fn close(mut self) -> Option<String> {
        self.input.shutdown().await.unwrap();
        drop(self.input);
        self.server.await.unwrap().unwrap();
        self.output.next_line().await.unwrap()
    }
}

fn request(id: u64, method: &str, params: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params})
}

#[tokio::test]
async fn test_session_lifecycle() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/project.all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"projectId": "p1"}])))
        .mount(&upstream)
        .await;

    let mut session = Session::start(&upstream.uri());

    session
        .send(request(
            1,
            "initialize",
            json!({
                "protocolVersion": "2025-06-18",
                "capabilities": {},
                "clientInfo": {"name": "test-client", "version": "1.0"}
            }),
        ))
        .await;
    let response = session.receive().await;
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2025-06-18");

    session
        .send(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
        .await;

    session.send(request(2, "tools/list", json!({}))).await;
    let response = session.receive().await;
    assert_eq!(response["id"], 2);
    assert_eq!(response["result"]["tools"].as_array().unwrap().len(), 68);
    assert_eq!(response["result"]["tools"][0]["name"], "list-projects");

    session
        .send(request(3, "tools/call", json!({"name": "list-projects", "arguments": {}})))
        .await;
    let response = session.receive().await;
    assert_eq!(response["id"], 3);
    assert_eq!(
        response["result"]["structuredContent"]["result"][0]["projectId"],
        "p1"
    );

    session.send(request(4, "resources/list", json!({}))).await;
    let response = session.receive().await;
    assert_eq!(response["result"]["resources"].as_array().unwrap().len(), 4);

    session
        .send(request(5, "prompts/get", json!({
            "name": "configure-backups",
            "arguments": {"kind": "mongo", "databaseId": "m1"}
        })))
        .await;
    let response = session.receive().await;
    assert_eq!(response["result"]["messages"][0]["role"], "user");

    assert_eq!(session.close().await, None);
}

#[tokio::test]
async fn test_malformed_line_gets_parse_error() {
    let mut session = Session::start("http://localhost:3000");

    session.send_raw("{this is not json").await;
    let response = session.receive().await;
    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], -32700);

    session.send(request(1, "ping", json!({}))).await;
    let response = session.receive().await;
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"], json!({}));

    session.close().await;
}

#[tokio::test]
async fn test_invalid_utf8_line_gets_parse_error() {
    let mut session = Session::start("http://localhost:3000");

    session.send_bytes(b"\xff\xfe garbage\n").await;
    let response = session.receive().await;
    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], -32700);

    session.send(request(2, "ping", json!({}))).await;
    let response = session.receive().await;
    assert_eq!(response["id"], 2);
    assert_eq!(response["result"], json!({}));

    assert_eq!(session.close().await, None);
}

#[tokio::test]
async fn test_cancelled_call_gets_no_response() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/project.all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&upstream)
        .await;

    let mut session = Session::start(&upstream.uri());

    session
        .send(request(9, "tools/call", json!({"name": "list-projects"})))
        .await;
    session
        .send(json!({
            "jsonrpc": "2.0",
            "method": "notifications/cancelled",
            "params": {"requestId": 9, "reason": "user aborted"}
        }))
        .await;
    session.send(request(10, "ping", json!({}))).await;

    let response = session.receive().await;
    assert_eq!(response["id"], 10);

    assert_eq!(session.close().await, None);
}

#[tokio::test]
async fn test_calls_interleave() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/project.all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/server.all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&upstream)
        .await;

    let mut session = Session::start(&upstream.uri());

    session
        .send(request(1, "tools/call", json!({"name": "list-projects"})))
        .await;
    session
        .send(request(2, "tools/call", json!({"name": "list-servers"})))
        .await;

    let first = session.receive().await;
    let second = session.receive().await;
    assert_eq!(first["id"], 2);
    assert_eq!(second["id"], 1);

    session.close().await;
}

#[tokio::test]
async fn test_reused_in_flight_id_rejected() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/project.all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&upstream)
        .await;

    let mut session = Session::start(&upstream.uri());

    session
        .send(request(7, "tools/call", json!({"name": "list-projects"})))
        .await;
    session
        .send(request(7, "tools/call", json!({"name": "list-servers"})))
        .await;

    let response = session.receive().await;
    assert_eq!(response["id"], 7);
    assert_eq!(response["error"]["code"], -32600);

    session
        .send(json!({
            "jsonrpc": "2.0",
            "method": "notifications/cancelled",
            "params": {"requestId": 7}
        }))
        .await;
    session.send(request(8, "ping", json!({}))).await;

    let response = session.receive().await;
    assert_eq!(response["id"], 8);

    assert_eq!(session.close().await, None);
}
