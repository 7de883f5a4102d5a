use std::io;

use thiserror::Error;

/// Failures while reading or writing framed messages.
///
/// All of these are fatal to the session: a single byte stream offers no way
/// to resynchronise after a bad frame.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Connection closed while waiting for a message")]
    ConnectionClosed,

    #[error("Invalid Content-Length value: {0:?}")]
    MalformedHeader(String),

    #[error("Malformed message body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Invalid JSON-RPC message: {0}")]
    InvalidMessage(String),
}

/// Problems with the params of a document notification. These are logged and
/// the notification is skipped.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Notification has no params")]
    MissingParams,

    #[error("Invalid document params: {0}")]
    InvalidParams(#[from] serde_json::Error),

    #[error("No document text for {0}")]
    MissingText(String),
}
