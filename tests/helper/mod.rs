//! Wire-level helpers shared by the E2E tests

#![allow(dead_code)]

use serde_json::{Value, json};

use spell_lsp::lsp::lifecycle::Termination;
use spell_lsp::lsp::server::Server;
use spell_lsp::spelling::WordSet;

/// Frames a JSON body the way a client would
pub fn frame(body: &Value) -> Vec<u8> {
    let body = serde_json::to_string(body).unwrap();
    format!("Content-Length: {}\r\n\r\n{}", body.len(), body).into_bytes()
}

/// Concatenates framed messages into a single input stream
pub fn input(messages: &[Value]) -> Vec<u8> {
    messages.iter().flat_map(frame).collect()
}

/// Splits server output back into JSON bodies, checking every header
pub fn parse_output(mut output: &[u8]) -> Vec<Value> {
    let mut messages = Vec::new();
    while !output.is_empty() {
        let separator = output
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("missing header separator");
        let header = std::str::from_utf8(&output[..separator]).unwrap();
        let length: usize = header
            .strip_prefix("Content-Length: ")
            .expect("missing Content-Length header")
            .parse()
            .unwrap();
        let body = &output[separator + 4..separator + 4 + length];
        messages.push(serde_json::from_slice(body).unwrap());
        output = &output[separator + 4 + length..];
    }
    messages
}

/// Runs a whole session and returns how it ended plus everything written
pub fn run_session(words: &[&str], messages: &[Value]) -> (Termination, Vec<Value>) {
    let input = input(messages);
    let mut output = Vec::new();

    let words = WordSet::from_iter(words.iter().copied());

    let termination = Server::new(input.as_slice(), &mut output, words)
        .run()
        .expect("session failed");

    (termination, parse_output(&output))
}

pub fn create_initialize_request(id: i64) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "initialize",
        "params": {"processId": 1, "rootUri": null, "capabilities": {}},
    })
}

pub fn create_initialized_notification() -> Value {
    json!({"jsonrpc": "2.0", "method": "initialized", "params": {}})
}

pub fn create_did_open_notification(uri: &str, version: i64, text: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didOpen",
        "params": {
            "textDocument": {
                "uri": uri,
                "languageId": "text",
                "version": version,
                "text": text,
            }
        },
    })
}

pub fn create_did_change_notification(uri: &str, version: i64, text: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didChange",
        "params": {
            "textDocument": {"uri": uri, "version": version},
            "contentChanges": [{"text": text}],
        },
    })
}

pub fn create_shutdown_request(id: i64) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "method": "shutdown"})
}

pub fn create_exit_notification() -> Value {
    json!({"jsonrpc": "2.0", "method": "exit"})
}

/// Range as `(line, start, end)` triples for compact assertions
pub fn diagnostic_ranges(notification: &Value) -> Vec<(u64, u64, u64)> {
    notification["params"]["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| {
            let range = &d["range"];
            assert_eq!(range["start"]["line"], range["end"]["line"]);
            (
                range["start"]["line"].as_u64().unwrap(),
                range["start"]["character"].as_u64().unwrap(),
                range["end"]["character"].as_u64().unwrap(),
            )
        })
        .collect()
}
