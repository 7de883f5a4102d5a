//! publishDiagnostics E2E tests

mod helper;

use serde_json::json;

use helper::{
    create_did_change_notification, create_did_open_notification, create_exit_notification,
    create_initialize_request, create_initialized_notification, create_shutdown_request,
    diagnostic_ranges, run_session,
};

fn session(words: &[&str], documents: Vec<serde_json::Value>) -> Vec<serde_json::Value> {
    let mut messages = vec![create_initialize_request(0), create_initialized_notification()];
    messages.extend(documents);
    messages.push(create_shutdown_request(1));
    messages.push(create_exit_notification());

    let (_, output) = run_session(words, &messages);
    // drop the initialize and shutdown responses
    output[1..output.len() - 1].to_vec()
}

#[test]
fn publishes_diagnostics_on_open() {
    let published = session(
        &["cat", "hat"],
        vec![create_did_open_notification("testfile", 0, "the cat in the hat")],
    );

    assert_eq!(published.len(), 1);
    assert_eq!(
        published[0],
        json!({
            "jsonrpc": "2.0",
            "method": "textDocument/publishDiagnostics",
            "params": {
                "uri": "testfile",
                "version": 0,
                "diagnostics": [
                    {
                        "range": {
                            "start": {"line": 0, "character": 0},
                            "end": {"line": 0, "character": 3},
                        },
                        "severity": 1,
                        "message": "",
                    },
                    {
                        "range": {
                            "start": {"line": 0, "character": 8},
                            "end": {"line": 0, "character": 10},
                        },
                        "severity": 1,
                        "message": "",
                    },
                    {
                        "range": {
                            "start": {"line": 0, "character": 11},
                            "end": {"line": 0, "character": 14},
                        },
                        "severity": 1,
                        "message": "",
                    },
                ],
            },
        })
    );
}

#[test]
fn each_change_publishes_a_full_replacement() {
    let published = session(
        &["the", "cat", "hat"],
        vec![
            create_did_open_notification("file:///notes.txt", 1, "The cat in the hat"),
            create_did_change_notification("file:///notes.txt", 2, "The cat\nin teh hat"),
            create_did_change_notification("file:///notes.txt", 3, "The cat"),
        ],
    );

    assert_eq!(published.len(), 3);
    assert_eq!(published[0]["params"]["version"], 1);
    assert_eq!(diagnostic_ranges(&published[0]), vec![(0, 8, 10)]);
    assert_eq!(published[1]["params"]["version"], 2);
    assert_eq!(diagnostic_ranges(&published[1]), vec![(1, 0, 2), (1, 3, 6)]);
    assert_eq!(published[2]["params"]["version"], 3);
    assert_eq!(diagnostic_ranges(&published[2]), vec![]);
}

#[test]
fn repeated_misspellings_are_each_reported() {
    let published = session(
        &[],
        vec![create_did_open_notification("file:///a.txt", 0, "zzz zzz\r\nzzz")],
    );

    assert_eq!(
        diagnostic_ranges(&published[0]),
        vec![(0, 0, 3), (0, 4, 7), (1, 0, 3)]
    );
}

#[test]
fn non_ascii_words_use_char_offsets() {
    let published = session(
        &["café"],
        vec![create_did_open_notification("file:///a.txt", 0, "café naïve")],
    );

    assert_eq!(diagnostic_ranges(&published[0]), vec![(0, 5, 10)]);
}

#[test]
fn missing_version_is_published_as_null() {
    let published = session(
        &[],
        vec![json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didOpen",
            "params": {"textDocument": {"uri": "untitled:1", "text": "ok"}},
        })],
    );

    assert_eq!(published[0]["params"]["version"], serde_json::Value::Null);
    assert_eq!(diagnostic_ranges(&published[0]), vec![(0, 0, 2)]);
}

#[test]
fn document_without_text_publishes_nothing() {
    let published = session(
        &[],
        vec![json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didChange",
            "params": {"textDocument": {"uri": "file:///a.txt", "version": 4}, "contentChanges": []},
        })],
    );

    assert!(published.is_empty());
}
