use lsp_types::{
    DiagnosticOptions, DiagnosticServerCapabilities, InitializeResult, PositionEncodingKind,
    ServerCapabilities, ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::SERVER_NAME;
use crate::lsp::diagnostics::generate_diagnostics;
use crate::lsp::error::{CodecError, DocumentError};
use crate::lsp::message::{
    Notification, RequestId, Response, ResponseError, SERVER_NOT_INITIALIZED, SHUTTING_DOWN,
};
use crate::lsp::types::{DocumentChangeParams, PublishDiagnosticsParams, TextDocument};
use crate::spelling::WordSet;

pub const PUBLISH_DIAGNOSTICS: &str = "textDocument/publishDiagnostics";

/// Handlers for the messages the server answers. Holds the word set for the
/// lifetime of the session.
pub struct Backend {
    words: WordSet,
}

impl Backend {
    pub fn new(words: WordSet) -> Self {
        Self { words }
    }

    pub fn server_capabilities() -> ServerCapabilities {
        ServerCapabilities {
            position_encoding: Some(PositionEncodingKind::UTF8),
            diagnostic_provider: Some(DiagnosticServerCapabilities::Options(DiagnosticOptions {
                identifier: Some("Spelling".to_string()),
                inter_file_dependencies: false,
                workspace_diagnostics: false,
                ..Default::default()
            })),
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            ..Default::default()
        }
    }

    pub fn initialize_result() -> InitializeResult {
        InitializeResult {
            capabilities: Self::server_capabilities(),
            server_info: Some(ServerInfo {
                name: SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        }
    }

    pub fn initialize(&self, id: Option<RequestId>) -> Result<Response, CodecError> {
        let result = serde_json::to_value(Self::initialize_result())
            .map_err(CodecError::MalformedBody)?;
        Ok(Response::ok(id, result))
    }

    pub fn shutdown(&self, id: Option<RequestId>) -> Response {
        Response::ok(id, Value::Null)
    }

    pub fn not_initialized(&self, id: Option<RequestId>) -> Response {
        Response::error(
            id,
            ResponseError::new(SERVER_NOT_INITIALIZED, "not initialized"),
        )
    }

    pub fn shutting_down(&self, id: Option<RequestId>) -> Response {
        Response::error(
            id,
            ResponseError::new(SHUTTING_DOWN, "shutting down; awaiting exit request"),
        )
    }

    /// Checks a document snapshot and builds the publishDiagnostics
    /// notification that replaces the client's view of it
    pub fn publish_diagnostics(&self, document: &TextDocument) -> Result<Notification, CodecError> {
        let diagnostics = generate_diagnostics(&self.words, &document.text);

        info!(
            "Publishing {} diagnostics for {}",
            diagnostics.len(),
            document.uri
        );

        Notification::new(
            PUBLISH_DIAGNOSTICS,
            PublishDiagnosticsParams {
                uri: document.uri.clone(),
                version: document.version,
                diagnostics,
            },
        )
    }
}

/// Builds a document snapshot from didOpen/didChange params.
///
/// The first content change wins over `textDocument.text` when both exist.
pub fn extract_document(params: Option<&Value>) -> Result<TextDocument, DocumentError> {
    let params = params.ok_or(DocumentError::MissingParams)?;
    let DocumentChangeParams {
        text_document,
        content_changes,
    } = serde_json::from_value(params.clone())?;

    let text = match content_changes.into_iter().next() {
        Some(change) => change.text,
        None => text_document
            .text
            .ok_or_else(|| DocumentError::MissingText(text_document.uri.clone()))?,
    };

    debug!(
        "Document {} (version {:?}) has {} bytes",
        text_document.uri,
        text_document.version,
        text.len()
    );

    Ok(TextDocument {
        uri: text_document.uri,
        text,
        version: text_document.version,
    })
}
